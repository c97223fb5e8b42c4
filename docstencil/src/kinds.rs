//! Names shared between the discovery layer and annotation rules.
//!
//! Value kinds and element types are plain strings so hosts can introduce
//! their own; the constants below cover the names the built-in conventions
//! refer to.

/// Value kinds reported by the node-discovery layer.
pub mod value {
    /// A named parameter of a function.
    pub const PARAMETER: &str = "Parameter";
    /// A type annotation.
    pub const TYPE: &str = "Type";
    /// Composite group pairing a parameter with its type.
    pub const TPARAM: &str = "Tparam";
    /// A returned value.
    pub const RETURN: &str = "Return";
    /// A returned value with a known type.
    pub const RETURN_TYPE_HINT: &str = "ReturnTypeHint";
    /// Present once when the element returns anything.
    pub const HAS_RETURN: &str = "HasReturn";
    /// Present once when the element takes any parameter.
    pub const HAS_PARAMETER: &str = "HasParameter";
    /// An exception or error raised by the element.
    pub const THROW: &str = "Throw";
    /// Present once when the element raises anything.
    pub const HAS_THROW: &str = "HasThrow";
    /// The name of a class.
    pub const CLASS_NAME: &str = "ClassName";
    /// An attribute declared on a class.
    pub const CLASS_ATTRIBUTE: &str = "ClassAttribute";
    /// A variadic positional parameter.
    pub const ARBITRARY_ARGS: &str = "ArbitraryArgs";
    /// A variadic keyword parameter.
    pub const KWARGS: &str = "Kwargs";
    /// A generic type parameter.
    pub const GENERICS: &str = "Generics";
}

/// Element-type tags for the code element being annotated.
pub mod element {
    /// Functions and methods.
    pub const FUNC: &str = "func";
    /// Classes, structs and similar aggregates.
    pub const CLASS: &str = "class";
    /// Whole files.
    pub const FILE: &str = "file";
    /// Type aliases and declarations.
    pub const TYPE: &str = "type";
}
