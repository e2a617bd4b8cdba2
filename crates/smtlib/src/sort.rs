/// SMT-LIB sort (type) representation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sort {
    /// Boolean sort
    Bool,
    /// Mathematical integer sort
    Int,
    /// Real number sort
    Real,
    /// Fixed-width bitvector: `(_ BitVec n)`
    BitVec(u32),
    /// Array sort: `(Array index_sort element_sort)`
    Array(Box<Sort>, Box<Sort>),
    /// Named datatype (tuples, structs, transaction data)
    Datatype(String),
    /// Uninterpreted sort
    Uninterpreted(String),
}

impl Sort {
    /// `(Array index element)` without the boxing noise at call sites.
    pub fn array(index: Sort, element: Sort) -> Self {
        Sort::Array(Box::new(index), Box::new(element))
    }
}

/// Signature of a function symbol: ordered argument sorts plus a result sort.
///
/// Predicates in a Horn system always have a `Bool` codomain, but nothing here
/// depends on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionSort {
    pub domain: Vec<Sort>,
    pub codomain: Sort,
}

impl FunctionSort {
    pub fn new(domain: Vec<Sort>, codomain: Sort) -> Self {
        Self { domain, codomain }
    }

    /// A relation over `domain`, i.e. a function into `Bool`.
    pub fn relation(domain: Vec<Sort>) -> Self {
        Self::new(domain, Sort::Bool)
    }

    /// Number of arguments.
    pub fn arity(&self) -> usize {
        self.domain.len()
    }
}
