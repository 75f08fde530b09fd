//! Type system for the IR.

use alloc::vec::Vec;
use core::fmt;

/// A type in the IR.
///
/// Every shape except [`Type::Struct`] maps to a fixed GLSL token. A struct
/// carries its member types in declaration order; it has no name of its own,
/// backends synthesize one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean scalar
    Bool,
    /// 32-bit signed integer scalar
    Int,
    /// 32-bit floating point scalar
    Float,
    /// 2-component float vector
    Vec2,
    /// 3-component float vector
    Vec3,
    /// 4-component float vector
    Vec4,
    /// 2x2 float matrix
    Mat2,
    /// 3x3 float matrix
    Mat3,
    /// 4x4 float matrix
    Mat4,
    /// Struct with ordered member types
    Struct(Vec<Type>),
}

impl Type {
    /// Get the GLSL token for this type.
    ///
    /// Returns `None` for structs, whose names are assigned by the renderer.
    pub fn glsl_name(&self) -> Option<&'static str> {
        match self {
            Type::Bool => Some("bool"),
            Type::Int => Some("int"),
            Type::Float => Some("float"),
            Type::Vec2 => Some("vec2"),
            Type::Vec3 => Some("vec3"),
            Type::Vec4 => Some("vec4"),
            Type::Mat2 => Some("mat2"),
            Type::Mat3 => Some("mat3"),
            Type::Mat4 => Some("mat4"),
            Type::Struct(_) => None,
        }
    }

    /// Check if this is a struct type.
    pub fn is_struct(&self) -> bool {
        matches!(self, Type::Struct(_))
    }

    /// Get the member types of a struct. Empty for every other type.
    pub fn members(&self) -> &[Type] {
        match self {
            Type::Struct(members) => members,
            _ => &[],
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Struct(members) => {
                write!(f, "struct {{")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, " {}", member)?;
                }
                if !members.is_empty() {
                    write!(f, " ")?;
                }
                write!(f, "}}")
            }
            // Every non-struct type has a token
            other => f.write_str(other.glsl_name().unwrap_or_default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, vec};

    use super::*;

    #[test]
    fn test_glsl_names() {
        assert_eq!(Type::Float.glsl_name(), Some("float"));
        assert_eq!(Type::Vec3.glsl_name(), Some("vec3"));
        assert_eq!(Type::Mat4.glsl_name(), Some("mat4"));
        assert_eq!(Type::Int.glsl_name(), Some("int"));
        assert_eq!(Type::Struct(vec![Type::Float]).glsl_name(), None);
    }

    #[test]
    fn test_members() {
        let ty = Type::Struct(vec![Type::Float, Type::Vec2]);
        assert!(ty.is_struct());
        assert_eq!(ty.members(), &[Type::Float, Type::Vec2]);
        assert!(Type::Mat2.members().is_empty());
        assert!(!Type::Mat2.is_struct());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Type::Vec4), "vec4");
        assert_eq!(format!("{}", Type::Struct(vec![])), "struct {}");
        let nested = Type::Struct(vec![Type::Float, Type::Struct(vec![Type::Mat3])]);
        assert_eq!(format!("{}", nested), "struct { float, struct { mat3 } }");
    }
}
