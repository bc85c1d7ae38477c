// Copyright 2026 the Umbra Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Auxiliary render state for image nodes.
//!
//! An image node is created during a commit together with an [`ImageState`]
//! holding three things the renderer needs: the resolved [`ImageSource`], the
//! [`ImageRequest`] handle the fetch subsystem issued for it, and a blur
//! radius. The state is immutable: a node that needs a different image is
//! replaced, never patched. That makes every accessor safe to call from any
//! number of renderer threads at once.
//!
//! The fetch itself is driven elsewhere. This module only stores the handle
//! and, if the fetch subsystem supplied one, runs its cancellation callback
//! when the last holder of the request goes away.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use crate::geometry::{Float, Size};

/// Where an image comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ImageSourceKind {
    /// No usable source.
    #[default]
    Invalid,
    /// Fetched over the network.
    Remote,
    /// Loaded from the local bundle or file system.
    Local,
}

/// A resolved image descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageSource {
    /// Source kind.
    pub kind: ImageSourceKind,
    /// Resource location.
    pub uri: String,
    /// Bundle name for [`Local`](ImageSourceKind::Local) sources, empty
    /// otherwise.
    pub bundle: String,
    /// Pixel density the image was authored for.
    pub scale: Float,
    /// Intrinsic size in neutral units, [`Size::ZERO`] if unknown.
    pub size: Size,
}

impl Default for ImageSource {
    fn default() -> Self {
        Self {
            kind: ImageSourceKind::Invalid,
            uri: String::new(),
            bundle: String::new(),
            scale: 3.0,
            size: Size::ZERO,
        }
    }
}

impl ImageSource {
    /// Creates a [`Remote`](ImageSourceKind::Remote) source.
    #[must_use]
    pub fn remote(uri: impl Into<String>) -> Self {
        Self {
            kind: ImageSourceKind::Remote,
            uri: uri.into(),
            ..Self::default()
        }
    }

    /// Creates a [`Local`](ImageSourceKind::Local) source.
    #[must_use]
    pub fn local(uri: impl Into<String>, bundle: impl Into<String>) -> Self {
        Self {
            kind: ImageSourceKind::Local,
            uri: uri.into(),
            bundle: bundle.into(),
            ..Self::default()
        }
    }

    /// Sets the authored scale.
    #[must_use]
    pub fn with_scale(mut self, scale: Float) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the intrinsic size.
    #[must_use]
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }
}

/// Opaque token the fetch subsystem uses to identify a request.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(pub u64);

impl fmt::Debug for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RequestToken({})", self.0)
    }
}

type CancelFn = Box<dyn FnOnce(RequestToken) + Send + Sync>;

/// Handle to an in-flight or completed image fetch.
///
/// The handle never drives the fetch. Dropping it runs the cancellation
/// callback (if any) exactly once, which lets the fetch subsystem abandon
/// work nobody will read.
pub struct ImageRequest {
    source: ImageSource,
    token: RequestToken,
    cancel: Option<CancelFn>,
}

impl ImageRequest {
    /// Creates a handle for a request issued for `source`.
    #[must_use]
    pub fn new(source: ImageSource, token: RequestToken) -> Self {
        Self {
            source,
            token,
            cancel: None,
        }
    }

    /// Registers the callback to run when this handle is dropped.
    #[must_use]
    pub fn with_cancel(
        mut self,
        cancel: impl FnOnce(RequestToken) + Send + Sync + 'static,
    ) -> Self {
        self.cancel = Some(Box::new(cancel));
        self
    }

    /// Returns the source this request was issued for.
    #[inline]
    #[must_use]
    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    /// Returns the fetch subsystem's token.
    #[inline]
    #[must_use]
    pub fn token(&self) -> RequestToken {
        self.token
    }
}

impl Drop for ImageRequest {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel(self.token);
        }
    }
}

impl fmt::Debug for ImageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageRequest")
            .field("source", &self.source)
            .field("token", &self.token)
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

/// Render state of an image node.
///
/// Cloning shares the underlying [`ImageRequest`]; the request is dropped
/// when the last clone is.
#[derive(Clone, Debug)]
pub struct ImageState {
    image_source: ImageSource,
    image_request: Arc<ImageRequest>,
    blur_radius: Float,
}

impl ImageState {
    /// Creates the state for a newly committed image node.
    ///
    /// # Panics
    ///
    /// Panics if `blur_radius` is negative or NaN.
    #[must_use]
    pub fn new(image_source: ImageSource, image_request: ImageRequest, blur_radius: Float) -> Self {
        assert!(
            blur_radius >= 0.0,
            "blur radius must be non-negative, got {blur_radius}"
        );
        Self {
            image_source,
            image_request: Arc::new(image_request),
            blur_radius,
        }
    }

    /// Returns the resolved image source.
    #[inline]
    #[must_use]
    pub fn image_source(&self) -> &ImageSource {
        &self.image_source
    }

    /// Returns the request handle.
    #[inline]
    #[must_use]
    pub fn image_request(&self) -> &ImageRequest {
        &self.image_request
    }

    /// Returns the blur radius.
    #[inline]
    #[must_use]
    pub fn blur_radius(&self) -> Float {
        self.blur_radius
    }
}
