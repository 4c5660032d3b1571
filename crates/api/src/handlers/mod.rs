//! Request handlers.
//!
//! Handlers parse the request, delegate to the [`AssetService`] held in
//! [`AppState`], and map failures via [`AppError`].
//!
//! [`AssetService`]: assetscope_core::service::AssetService
//! [`AppState`]: crate::state::AppState
//! [`AppError`]: crate::error::AppError

pub mod assets;
