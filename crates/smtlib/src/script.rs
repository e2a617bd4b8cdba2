use crate::command::Command;

/// Logic name for constrained Horn clause problems.
pub const HORN_LOGIC: &str = "HORN";

/// An SMT-LIB script: a sequence of commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Script {
    commands: Vec<Command>,
}

impl Script {
    pub fn new() -> Self {
        Self::default()
    }

    /// A script that starts with `(set-logic HORN)`.
    pub fn horn() -> Self {
        Self {
            commands: vec![Command::SetLogic(HORN_LOGIC.to_string())],
        }
    }

    pub fn push(&mut self, cmd: Command) {
        self.commands.push(cmd);
    }

    pub fn extend(&mut self, cmds: impl IntoIterator<Item = Command>) {
        self.commands.extend(cmds);
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Names introduced by `declare-fun`, in script order.
    pub fn declared_symbols(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            Command::DeclareFun(name, _, _) => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
