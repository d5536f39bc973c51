use std::future::IntoFuture;

use kernel::KernelError;

use crate::error::ErrorStatus;

// Adapted from: https://github.com/HalsekiRaika/architectured/blob/e5caa5c7ae801d1aaac6e275b3ea0ef26d6ff26b/server/src/controller.rs
pub trait Intake<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

pub trait Exhaust<O>: 'static + Sync + Send {
    type To;
    fn emit(&self, output: O) -> Self::To;
}

/// Request -> DTO -> service -> DTO -> response.
///
/// A failed service call never reaches the presenter; its report becomes the `ErrorStatus`
/// the route answers with.
pub struct Controller<T, P> {
    transformer: T,
    presenter: P,
}

impl<T, P> Controller<T, P> {
    pub fn new(transformer: T, presenter: P) -> Self {
        Self {
            transformer,
            presenter,
        }
    }

    pub async fn handle<I, O, F, Fut>(self, input: I, f: F) -> Result<P::To, ErrorStatus>
    where
        T: Intake<I>,
        P: Exhaust<O>,
        F: FnOnce(T::To) -> Fut,
        Fut: IntoFuture<Output = error_stack::Result<O, KernelError>>,
    {
        let output = f(self.transformer.emit(input)).await?;
        Ok(self.presenter.emit(output))
    }
}

impl<P> Controller<(), P> {
    /// For requests that carry no input, such as the list endpoints and the reset.
    pub async fn fetch<O, F, Fut>(self, f: F) -> Result<P::To, ErrorStatus>
    where
        P: Exhaust<O>,
        F: FnOnce() -> Fut,
        Fut: IntoFuture<Output = error_stack::Result<O, KernelError>>,
    {
        let output = f().await?;
        Ok(self.presenter.emit(output))
    }
}
