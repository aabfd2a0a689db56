// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Error type shared by every mapping operation.
//!
//! Missing properties and null source values are normal control flow and
//! never show up here. Everything in this module reaches the caller: the
//! mapper does not log and swallow.

use std::borrow::Cow;

use thiserror::Error;

/// Set BEANKIT_PANIC_ON_ERROR=1 at compile time to panic where an error is created.
pub const PANIC_ON_ERROR: bool = option_env!("BEANKIT_PANIC_ON_ERROR").is_some();

#[inline(always)]
pub const fn should_panic_on_error() -> bool {
    PANIC_ON_ERROR
}

/// Error type for bean copy, map and introspection operations.
///
/// # Always use the constructor functions
///
/// Build errors through [`Error::bean_mapping`], [`Error::type_error`] and
/// friends rather than the enum syntax. The constructors take anything
/// convertible into `Cow<'static, str>` and honour `BEANKIT_PANIC_ON_ERROR`,
/// which makes the program panic at the exact creation site:
///
/// ```bash
/// RUST_BACKTRACE=1 BEANKIT_PANIC_ON_ERROR=1 cargo test
/// ```
///
/// ```rust
/// use beankit_core::error::Error;
///
/// let cause = Error::type_error("expected i32, got String");
/// let err = Error::bean_mapping("userId", cause);
/// assert_eq!(err.property(), Some("userId"));
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The destination bean could not be constructed.
    #[error("Failed to instantiate bean {type_name}: {reason}")]
    BeanInstantiation {
        type_name: Cow<'static, str>,
        reason: Cow<'static, str>,
    },

    /// A raw field read or write was rejected.
    #[error("Failed to copy field '{field}': {reason}")]
    FieldAccess {
        field: Cow<'static, str>,
        reason: Cow<'static, str>,
    },

    /// Umbrella error for any failure while resolving, converting or writing
    /// a property. Carries the failing property name.
    #[error("Failed to map property '{property}': {source}")]
    BeanMapping {
        property: Cow<'static, str>,
        #[source]
        source: Box<Error>,
    },

    /// A value type the operation does not know how to handle.
    #[error("{0}")]
    Unsupported(Cow<'static, str>),

    /// A value did not match the declared type of its destination.
    #[error("{0}")]
    TypeError(Cow<'static, str>),

    /// No property or field with the given name exists on the bean.
    #[error("{0}")]
    UnknownProperty(Cow<'static, str>),

    /// The property exists but has no write capability.
    #[error("{0}")]
    NotWritable(Cow<'static, str>),

    /// The property exists but has no read capability.
    #[error("{0}")]
    NotReadable(Cow<'static, str>),

    /// Building the descriptor set of a bean type failed.
    #[error("{0}")]
    Introspection(Cow<'static, str>),

    /// Failure raised inside a user-supplied converter.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn bean_instantiation<N, S>(type_name: N, reason: S) -> Self
    where
        N: Into<Cow<'static, str>>,
        S: Into<Cow<'static, str>>,
    {
        let err = Error::BeanInstantiation {
            type_name: type_name.into(),
            reason: reason.into(),
        };
        if PANIC_ON_ERROR {
            panic!("BEANKIT_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn field_access<N, S>(field: N, reason: S) -> Self
    where
        N: Into<Cow<'static, str>>,
        S: Into<Cow<'static, str>>,
    {
        let err = Error::FieldAccess {
            field: field.into(),
            reason: reason.into(),
        };
        if PANIC_ON_ERROR {
            panic!("BEANKIT_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Wraps `cause` with the name of the property being mapped.
    ///
    /// A cause that is already a `BeanMapping` error is returned unchanged so
    /// the innermost (most specific) property name wins.
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn bean_mapping<N: Into<Cow<'static, str>>>(property: N, cause: Error) -> Self {
        if matches!(cause, Error::BeanMapping { .. }) {
            return cause;
        }
        let err = Error::BeanMapping {
            property: property.into(),
            source: Box::new(cause),
        };
        if PANIC_ON_ERROR {
            panic!("BEANKIT_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unsupported<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Unsupported(s.into());
        if PANIC_ON_ERROR {
            panic!("BEANKIT_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn type_error<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::TypeError(s.into());
        if PANIC_ON_ERROR {
            panic!("BEANKIT_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn unknown_property<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::UnknownProperty(s.into());
        if PANIC_ON_ERROR {
            panic!("BEANKIT_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn not_writable<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::NotWritable(s.into());
        if PANIC_ON_ERROR {
            panic!("BEANKIT_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn not_readable<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::NotReadable(s.into());
        if PANIC_ON_ERROR {
            panic!("BEANKIT_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn introspection<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::Introspection(s.into());
        if PANIC_ON_ERROR {
            panic!("BEANKIT_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Name of the property a [`Error::BeanMapping`] failed on.
    pub fn property(&self) -> Option<&str> {
        match self {
            Error::BeanMapping { property, .. } => Some(property),
            Error::FieldAccess { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Innermost error, skipping `BeanMapping` wrappers.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::BeanMapping { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Appends the Rust type name to a [`Error::TypeError`] message.
    #[inline(never)]
    pub fn enhance_type_error<T: ?Sized + 'static>(err: Error) -> Error {
        if let Error::TypeError(s) = err {
            let mut msg = s.to_string();
            msg.push_str(" (type: ");
            msg.push_str(std::any::type_name::<T>());
            msg.push(')');
            Error::type_error(msg)
        } else {
            err
        }
    }
}

/// Ensures a condition is true; otherwise returns an [`enum@Error`].
///
/// ```
/// use beankit_core::ensure;
/// use beankit_core::error::Error;
///
/// fn check_size(n: usize) -> Result<(), Error> {
///     ensure!(n > 0, Error::unsupported("empty input"));
///     ensure!(n < 10, "size {} too large", n);
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal) => {
        if !$cond {
            return Err($crate::error::Error::unsupported($msg));
        }
    };
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)*) => {
        if !$cond {
            return Err($crate::error::Error::unsupported(format!($fmt, $($arg)*)));
        }
    };
}

/// Returns early with a [`Error::TypeError`].
///
/// ```
/// use beankit_core::bail;
/// use beankit_core::error::Error;
///
/// fn reject(kind: &str) -> Result<(), Error> {
///     bail!("cannot assign {}", kind);
/// }
/// ```
#[macro_export]
macro_rules! bail {
    ($err:expr) => {
        return Err($crate::error::Error::type_error($err))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::error::Error::type_error(format!($fmt, $($arg)*)))
    };
}
