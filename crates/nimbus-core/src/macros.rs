//! Declarative macros shared by the service crates.

/// Declare a restricted-value string field as a Rust enum.
///
/// Every declared variant maps to exactly one wire string. Values outside the
/// set are kept verbatim in `Unknown(String)`, so responses carrying values
/// newer than this crate still decode, and inputs may send them.
///
/// # Examples
///
/// ```
/// nimbus_core::string_enum! {
///     /// Sort order.
///     pub enum Order {
///         Ascending = "ASCENDING",
///         Descending = "DESCENDING",
///     }
/// }
///
/// assert_eq!(Order::Ascending.as_str(), "ASCENDING");
/// assert_eq!(Order::from("DESCENDING"), Order::Descending);
/// assert_eq!(Order::from("SIDEWAYS"), Order::Unknown("SIDEWAYS".to_owned()));
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value outside the documented set, passed through unchanged.
            Unknown(::std::string::String),
        }

        impl $name {
            /// Every documented wire value.
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            /// Returns the wire string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            /// Returns whether the value belongs to the documented set.
            #[must_use]
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(value: ::std::string::String) -> Self {
                match value.as_str() {
                    $($value => Self::$variant,)+
                    _ => Self::Unknown(value),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let value = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Ok(Self::from(value))
            }
        }
    };
}

/// Declare the typed errors of a service: one variant per documented error
/// code, each wrapping a payload that exposes the common
/// [`ApiError`](crate::ApiError) base.
///
/// Variants are plain `fn(Payload) -> Self` constructors, so operations list
/// them directly in their [`ErrorTable`](crate::ErrorTable).
#[macro_export]
macro_rules! service_error {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($payload:ty) = $code:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant($payload),
            )+
        }

        impl $name {
            /// Every error code of the service.
            pub const CODES: &'static [&'static str] = &[$($code),+];

            /// Returns the error code.
            #[must_use]
            pub fn code(&self) -> &'static str {
                match self {
                    $(Self::$variant(_) => $code,)+
                }
            }

            /// Returns the common error base.
            #[must_use]
            pub fn api_error(&self) -> &$crate::ApiError {
                match self {
                    $(Self::$variant(inner) => ::std::convert::AsRef::<$crate::ApiError>::as_ref(inner),)+
                }
            }

            /// Returns the HTTP status of the failed response.
            #[must_use]
            pub fn status(&self) -> $crate::__private::http::StatusCode {
                self.api_error().status
            }

            /// Returns the error message, if the service sent one.
            #[must_use]
            pub fn message(&self) -> ::std::option::Option<&str> {
                self.api_error().message.as_deref()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}: {}", self.code(), self.message().unwrap_or("<no message>"))
            }
        }

        impl ::std::error::Error for $name {}
    };
}

/// Implement [`FromResponse`](crate::FromResponse) for serde output shapes
/// carried entirely in a JSON body.
#[macro_export]
macro_rules! impl_json_output {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::FromResponse for $ty {
                fn from_response(
                    response: &$crate::Response,
                ) -> ::std::result::Result<Self, $crate::ParseError> {
                    $crate::json_body(response)
                }
            }
        )+
    };
}
