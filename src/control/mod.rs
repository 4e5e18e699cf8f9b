//! Control structures for result propagation.
//!
//! - [`Either`]: a disjoint union of two types, used as the return channel
//!   of every validated construction in this library
//!
//! # Examples
//!
//! ```rust
//! use verdict::control::Either;
//!
//! let outcome: Either<String, i32> = Either::Right(42);
//! assert!(outcome.is_right());
//! ```

mod either;

pub use either::Either;
