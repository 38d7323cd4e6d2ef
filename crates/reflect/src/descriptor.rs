//! Structural description of a possibly parameterized type

use serde::{Deserialize, Serialize};
use std::fmt;

/// A type as a raw name plus ordered type arguments.
///
/// Descriptors compare and hash structurally, so two descriptors are equal
/// exactly when their raw names and all of their arguments are equal.
/// A [`TypeDescriptor::Variable`] stands for a type parameter that has not
/// been bound to a concrete type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeDescriptor {
    Concrete {
        raw: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        arguments: Vec<TypeDescriptor>,
    },
    Variable {
        name: String,
    },
}

impl TypeDescriptor {
    /// A type without arguments
    pub fn raw(name: impl Into<String>) -> Self {
        Self::parameterized(name, Vec::new())
    }

    /// A raw type applied to `arguments`
    pub fn parameterized(
        raw: impl Into<String>,
        arguments: impl IntoIterator<Item = TypeDescriptor>,
    ) -> Self {
        TypeDescriptor::Concrete {
            raw: raw.into(),
            arguments: arguments.into_iter().collect(),
        }
    }

    /// An unbound type parameter
    pub fn variable(name: impl Into<String>) -> Self {
        TypeDescriptor::Variable { name: name.into() }
    }

    /// The descriptor of `T`.
    ///
    /// Built from [`std::any::type_name`], so raw names are fully qualified
    /// paths (`alloc::vec::Vec`) whose exact text may vary between compiler
    /// releases. Compare descriptors from the same build only.
    pub fn of<T: ?Sized>() -> Self {
        Self::parse(std::any::type_name::<T>())
    }

    /// Parse a type name of the form `path<arg, ...>`.
    ///
    /// Only path types are split into arguments. Tuples, arrays, references,
    /// function pointers and trait objects are kept whole as raw names.
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        match split_arguments(name) {
            Some((raw, arguments)) => {
                Self::parameterized(raw, arguments.into_iter().map(Self::parse))
            }
            None => Self::raw(name),
        }
    }

    /// Raw type name, or the parameter name for a variable
    pub fn raw_name(&self) -> &str {
        match self {
            TypeDescriptor::Concrete { raw, .. } => raw,
            TypeDescriptor::Variable { name } => name,
        }
    }

    pub fn arguments(&self) -> &[TypeDescriptor] {
        match self {
            TypeDescriptor::Concrete { arguments, .. } => arguments,
            TypeDescriptor::Variable { .. } => &[],
        }
    }

    /// Whether no unbound variable occurs anywhere in the descriptor
    pub fn is_bound(&self) -> bool {
        self.first_unbound().is_none()
    }

    /// Name of the first unbound variable, depth first
    pub fn first_unbound(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Variable { name } => Some(name),
            TypeDescriptor::Concrete { arguments, .. } => {
                arguments.iter().find_map(TypeDescriptor::first_unbound)
            }
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.raw_name())?;
        let arguments = self.arguments();
        if arguments.is_empty() {
            return Ok(());
        }
        f.write_str("<")?;
        for (index, argument) in arguments.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{argument}")?;
        }
        f.write_str(">")
    }
}

fn is_path(raw: &str) -> bool {
    !raw.is_empty()
        && raw
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == ':')
}

// `>` of a `->` arrow is not a closing bracket.
fn is_arrow(bytes: &[u8], index: usize) -> bool {
    index > 0 && bytes[index - 1] == b'-'
}

fn split_arguments(name: &str) -> Option<(&str, Vec<&str>)> {
    let open = name.find('<')?;
    let raw = &name[..open];
    if !is_path(raw) {
        return None;
    }

    let bytes = name.as_bytes();
    let mut depth = 0usize;
    let mut start = open + 1;
    let mut arguments = Vec::new();
    for (index, &byte) in bytes.iter().enumerate().skip(open) {
        match byte {
            b'<' | b'(' | b'[' => depth += 1,
            b'>' if is_arrow(bytes, index) => {}
            b'>' | b')' | b']' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    // The bracket opened after the raw name must close the name.
                    if index != bytes.len() - 1 {
                        return None;
                    }
                    arguments.push(name[start..index].trim());
                }
            }
            b',' if depth == 1 => {
                arguments.push(name[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }

    if depth != 0 || arguments.iter().any(|argument| argument.is_empty()) {
        return None;
    }
    Some((raw, arguments))
}
