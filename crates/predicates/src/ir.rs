/// Program model consumed by the predicate layer.
///
/// The frontend owns the real AST; the CHC encoder only needs node identity,
/// the kind of program point, names, and the state variables in scope. These
/// types are that projection. Definitions are shared behind `Arc` so a
/// predicate can refer to its program point without borrowing the AST.
use std::fmt;
use std::sync::Arc;

use sol_chc_smtlib::Sort;

/// Identity of an AST node, as assigned by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A declared variable (state variable, parameter or return value).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableDeclaration {
    pub id: NodeId,
    pub name: String,
    pub sort: Sort,
}

impl VariableDeclaration {
    pub fn new(id: NodeId, name: impl Into<String>, sort: Sort) -> Self {
        Self {
            id,
            name: name.into(),
            sort,
        }
    }
}

/// A contract definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractDefinition {
    pub id: NodeId,
    pub name: String,
    /// Own state variables in declaration order.
    pub state_variables: Vec<VariableDeclaration>,
    /// Linearized base contracts, most-base first, excluding this contract.
    pub bases: Vec<Arc<ContractDefinition>>,
}

impl ContractDefinition {
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            state_variables: Vec::new(),
            bases: Vec::new(),
        }
    }

    pub fn with_state_variables(mut self, vars: Vec<VariableDeclaration>) -> Self {
        self.state_variables = vars;
        self
    }

    pub fn with_bases(mut self, bases: Vec<Arc<ContractDefinition>>) -> Self {
        self.bases = bases;
        self
    }

    /// State variables of every base (in linearization order) followed by
    /// this contract's own.
    pub fn state_variables_including_inherited(&self) -> Vec<VariableDeclaration> {
        self.bases
            .iter()
            .flat_map(|base| base.state_variables.iter())
            .chain(self.state_variables.iter())
            .cloned()
            .collect()
    }
}

/// What sort of function a [`FunctionDefinition`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Function,
    Constructor,
    Fallback,
    Receive,
}

/// A function definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDefinition {
    pub id: NodeId,
    /// Source name; empty for constructors, fallback and receive.
    pub name: String,
    pub kind: FunctionKind,
    /// Name of the defining contract, `None` for free functions.
    pub contract_name: Option<String>,
    pub parameters: Vec<VariableDeclaration>,
    pub return_parameters: Vec<VariableDeclaration>,
}

impl FunctionDefinition {
    pub fn new(id: NodeId, name: impl Into<String>, kind: FunctionKind) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            contract_name: None,
            parameters: Vec::new(),
            return_parameters: Vec::new(),
        }
    }

    pub fn in_contract(mut self, contract: impl Into<String>) -> Self {
        self.contract_name = Some(contract.into());
        self
    }

    pub fn with_parameters(mut self, params: Vec<VariableDeclaration>) -> Self {
        self.parameters = params;
        self
    }

    pub fn with_return_parameters(mut self, params: Vec<VariableDeclaration>) -> Self {
        self.return_parameters = params;
        self
    }

    /// Name used in diagnostics: `constructor`, `fallback` and `receive` for
    /// the special functions, the source name otherwise.
    pub fn display_name(&self) -> &str {
        match self.kind {
            FunctionKind::Function => &self.name,
            FunctionKind::Constructor => "constructor",
            FunctionKind::Fallback => "fallback",
            FunctionKind::Receive => "receive",
        }
    }

    pub fn is_constructor(&self) -> bool {
        self.kind == FunctionKind::Constructor
    }
}

/// Any other program point: a block, a loop header, a call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramPoint {
    pub id: NodeId,
    pub label: String,
}

impl ProgramPoint {
    pub fn new(id: NodeId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// Tag of a [`ProgramNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    None,
    Contract,
    Function,
    Other,
}

/// The program point a predicate represents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProgramNode {
    /// Not tied to a specific AST node (e.g. the global error target).
    #[default]
    None,
    Contract(Arc<ContractDefinition>),
    Function(Arc<FunctionDefinition>),
    Other(Arc<ProgramPoint>),
}

impl ProgramNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            ProgramNode::None => NodeKind::None,
            ProgramNode::Contract(_) => NodeKind::Contract,
            ProgramNode::Function(_) => NodeKind::Function,
            ProgramNode::Other(_) => NodeKind::Other,
        }
    }

    pub fn id(&self) -> Option<NodeId> {
        match self {
            ProgramNode::None => None,
            ProgramNode::Contract(c) => Some(c.id),
            ProgramNode::Function(f) => Some(f.id),
            ProgramNode::Other(p) => Some(p.id),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            ProgramNode::None => None,
            ProgramNode::Contract(c) => Some(&c.name),
            ProgramNode::Function(f) => Some(f.display_name()),
            ProgramNode::Other(p) => Some(&p.label),
        }
    }

    /// Same kind and same node identity. Definitions are compared by id
    /// only; the frontend guarantees ids are unique per source unit.
    pub fn same_node(&self, other: &ProgramNode) -> bool {
        self.kind() == other.kind() && self.id() == other.id()
    }
}

impl From<Arc<ContractDefinition>> for ProgramNode {
    fn from(c: Arc<ContractDefinition>) -> Self {
        ProgramNode::Contract(c)
    }
}

impl From<Arc<FunctionDefinition>> for ProgramNode {
    fn from(f: Arc<FunctionDefinition>) -> Self {
        ProgramNode::Function(f)
    }
}

impl From<Arc<ProgramPoint>> for ProgramNode {
    fn from(p: Arc<ProgramPoint>) -> Self {
        ProgramNode::Other(p)
    }
}

/// Supplies the variables visible when a predicate is created.
///
/// The registry calls this once per creation; the answer is frozen into the
/// predicate and never recomputed.
pub trait EncodingContext {
    /// State variables in scope at `node`, in declaration order.
    fn state_variables_in_scope(&self, node: &ProgramNode) -> Option<Vec<VariableDeclaration>>;
}

/// Scope of the contract currently being encoded.
#[derive(Debug, Clone, Default)]
pub struct ContractScope {
    current: Option<Arc<ContractDefinition>>,
}

impl ContractScope {
    pub fn new(contract: Arc<ContractDefinition>) -> Self {
        Self {
            current: Some(contract),
        }
    }

    pub fn current_contract(&self) -> Option<&Arc<ContractDefinition>> {
        self.current.as_ref()
    }
}

impl EncodingContext for ContractScope {
    fn state_variables_in_scope(&self, node: &ProgramNode) -> Option<Vec<VariableDeclaration>> {
        match node {
            ProgramNode::Contract(c) => Some(c.state_variables_including_inherited()),
            ProgramNode::Function(_) => Some(
                self.current
                    .as_ref()
                    .map(|c| c.state_variables_including_inherited())
                    .unwrap_or_default(),
            ),
            ProgramNode::Other(_) | ProgramNode::None => None,
        }
    }
}
