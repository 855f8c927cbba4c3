// Use cases layer: application workflows for the login service.

pub mod login;

#[cfg(test)]
pub(crate) mod test_support;

pub use login::LoginUseCase;
