//! Macros generating the per-shape structs, builders, and category enums.
//!
//! Every composite shape is declared once, as its grammar production: fields
//! in child order, each tagged `required` or `optional`. The macro derives the
//! struct, accessors, the validating builder, `to_builder()` derivation, and
//! the child-collection impl from that single declaration, so the declared
//! field order *is* the children contract.

/// Declares one composite shape and its builder.
///
/// ```ignore
/// ast_node! {
///     /// Return statement: `return exprlist [';']`.
///     pub struct ReturnStat / ReturnStatBuilder: ReturnStat {
///         required return_token: Arc<Token>,
///         required values: Arc<SeparatedList<Expr>>,
///         optional semicolon: Arc<Token>,
///     }
/// }
/// ```
macro_rules! ast_node {
    (
        $(#[$meta:meta])*
        pub struct $name:ident / $builder:ident: $kind:ident {
            $( $class:ident $field:ident: $ty:ty, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            range: ::text_size::TextRange,
            $( $field: $crate::macros::ast_field_ty!($class $ty), )+
        }

        impl $name {
            pub const KIND: $crate::SyntaxKind = $crate::SyntaxKind::$kind;

            /// Returns an empty builder for this shape.
            pub fn builder() -> $builder {
                $builder::default()
            }

            #[inline]
            pub fn kind(&self) -> $crate::SyntaxKind {
                Self::KIND
            }

            #[inline]
            pub fn range(&self) -> ::text_size::TextRange {
                self.range
            }

            $( $crate::macros::ast_field_accessor!($class $field: $ty); )+

            /// Child sequence of this production, in declared field order.
            pub fn children(&self) -> ::std::vec::Vec<$crate::node::Element> {
                let mut out = ::std::vec::Vec::new();
                $( $crate::node::ChildElements::collect_into(&self.$field, &mut out); )+
                out
            }

            /// Builder seeded with this node's fields. Fields left untouched
            /// stay reference-shared with the original; no subtree is copied.
            pub fn to_builder(&self) -> $builder {
                $builder {
                    $( $field: $crate::macros::ast_field_seed!($class self.$field.clone()), )+
                }
            }
        }

        impl $crate::node::ChildElements for ::triomphe::Arc<$name> {
            fn collect_into(&self, out: &mut ::std::vec::Vec<$crate::node::Element>) {
                out.push($crate::node::Element::Node($crate::node::Node::from(self.clone())));
            }
        }

        #[derive(Debug, Clone, Default)]
        pub struct $builder {
            $( $field: ::core::option::Option<$ty>, )+
        }

        impl $builder {
            $(
                pub fn $field(mut self, value: $ty) -> Self {
                    self.$field = ::core::option::Option::Some(value);
                    self
                }
            )+

            /// Validates required fields and seals the node. The range is
            /// computed from the children and never changes afterwards.
            pub fn build(
                self,
            ) -> ::core::result::Result<::triomphe::Arc<$name>, $crate::BuildError> {
                let mut node = $name {
                    range: ::text_size::TextRange::default(),
                    $( $field: $crate::macros::ast_field_take!($class self.$field, $field, $kind), )+
                };
                node.range = $crate::node::span_of(&node.children());
                ::core::result::Result::Ok(::triomphe::Arc::new(node))
            }
        }
    };
}

/// Declares a category enum over `Arc`-shared shapes, with kind/range/children
/// dispatch and the conversions into [`crate::Node`].
macro_rules! ast_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident($payload:ident), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $variant(::triomphe::Arc<$payload>), )+
        }

        impl $name {
            pub fn kind(&self) -> $crate::SyntaxKind {
                match self {
                    $( Self::$variant(node) => node.kind(), )+
                }
            }

            pub fn range(&self) -> ::text_size::TextRange {
                match self {
                    $( Self::$variant(node) => node.range(), )+
                }
            }

            pub fn children(&self) -> ::std::vec::Vec<$crate::node::Element> {
                match self {
                    $( Self::$variant(node) => node.children(), )+
                }
            }
        }

        impl $crate::node::ChildElements for $name {
            fn collect_into(&self, out: &mut ::std::vec::Vec<$crate::node::Element>) {
                out.push($crate::node::Element::Node($crate::node::Node::from(self.clone())));
            }
        }

        $(
            impl ::core::convert::From<::triomphe::Arc<$payload>> for $name {
                fn from(node: ::triomphe::Arc<$payload>) -> Self {
                    Self::$variant(node)
                }
            }

            impl ::core::convert::From<::triomphe::Arc<$payload>> for $crate::node::Node {
                fn from(node: ::triomphe::Arc<$payload>) -> Self {
                    $crate::node::Node::from($name::$variant(node))
                }
            }
        )+
    };
}

macro_rules! ast_field_ty {
    (required $ty:ty) => { $ty };
    (optional $ty:ty) => { ::core::option::Option<$ty> };
}

macro_rules! ast_field_accessor {
    (required $field:ident: $ty:ty) => {
        #[inline]
        pub fn $field(&self) -> &$ty {
            &self.$field
        }
    };
    (optional $field:ident: $ty:ty) => {
        #[inline]
        pub fn $field(&self) -> ::core::option::Option<&$ty> {
            self.$field.as_ref()
        }
    };
}

macro_rules! ast_field_take {
    (required $value:expr, $field:ident, $kind:ident) => {
        match $value {
            ::core::option::Option::Some(value) => value,
            ::core::option::Option::None => {
                return ::core::result::Result::Err($crate::BuildError::MissingRequiredField {
                    field: ::core::stringify!($field),
                    kind: $crate::SyntaxKind::$kind,
                });
            }
        }
    };
    (optional $value:expr, $field:ident, $kind:ident) => {
        $value
    };
}

macro_rules! ast_field_seed {
    (required $value:expr) => {
        ::core::option::Option::Some($value)
    };
    (optional $value:expr) => {
        $value
    };
}

pub(crate) use {ast_enum, ast_field_accessor, ast_field_seed, ast_field_take, ast_field_ty, ast_node};
