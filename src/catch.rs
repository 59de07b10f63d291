//! Turning failed operations into [`Fallible::None`].
//!
//! [`run`] captures every error of an operation. [`Catch`] captures only the
//! error categories it was built with and hands every other error back to the
//! caller untouched.
use crate::error::BoxError;
use crate::fallible::Fallible;
use core::any::type_name;
use core::fmt;
use std::error::Error;
use tracing::{debug, trace};

/// Runs `operation` immediately, turning its error into the absence reason.
pub fn run<T, E, F>(operation: F) -> Fallible<T, E>
where
    F: FnOnce() -> Result<T, E>,
{
    operation().into()
}

/// Runs `operation`, capturing only errors of type `E`.
///
/// The captured reason is the operation's own error value, downcast to `E`.
/// Any other error is returned as `Err`.
pub fn run_as<E, T, F>(operation: F) -> Result<Fallible<T, E>, BoxError>
where
    E: Error + 'static,
    F: FnOnce() -> Result<T, BoxError>,
{
    match operation() {
        Ok(value) => Ok(Fallible::Some(value)),
        Err(error) => match error.downcast::<E>() {
            Ok(caught) => {
                debug!(category = type_name::<E>(), "captured error as absence reason");
                Ok(Fallible::None(*caught))
            }
            Err(error) => {
                trace!(error = %error, "propagating uncaught error");
                Err(error)
            }
        },
    }
}

#[derive(Clone, Copy)]
struct Category {
    name: &'static str,
    matches: fn(&(dyn Error + Send + Sync + 'static)) -> bool,
}

/// An ordered list of error categories to capture.
///
/// Categories are tested in the order they were added with [`Catch::of`], and
/// the first one the error belongs to wins.
#[derive(Clone, Default)]
#[must_use]
pub struct Catch {
    categories: Vec<Category>,
}

impl Catch {
    pub const fn new() -> Self {
        Self { categories: Vec::new() }
    }

    pub fn of<E: Error + 'static>(mut self) -> Self {
        self.categories.push(Category {
            name: type_name::<E>(),
            matches: |error| error.is::<E>(),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Name of the first category `error` belongs to.
    pub fn matching(&self, error: &(dyn Error + Send + Sync + 'static)) -> Option<&'static str> {
        self.categories
            .iter()
            .find(|category| (category.matches)(error))
            .map(|category| category.name)
    }

    /// Runs `operation` immediately. An error in one of the categories
    /// becomes the absence reason, any other error is returned as `Err`.
    pub fn run<T, F>(&self, operation: F) -> Result<Fallible<T, BoxError>, BoxError>
    where
        F: FnOnce() -> Result<T, BoxError>,
    {
        match operation() {
            Ok(value) => Ok(Fallible::Some(value)),
            Err(error) => match self.matching(error.as_ref()) {
                Some(category) => {
                    debug!(category, "captured error as absence reason");
                    Ok(Fallible::None(error))
                }
                None => {
                    trace!(error = %error, categories = self.len(), "propagating uncaught error");
                    Err(error)
                }
            },
        }
    }
}

impl fmt::Debug for Catch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.categories.iter().map(|category| category.name)).finish()
    }
}
