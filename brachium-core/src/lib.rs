// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

/// The `brachium-core` library implements the pose kernel for a three
/// segment desk arm.
///
/// The kernel maps a single target elevation onto three clamped joint
/// angles and converts those angles into planar joint positions. It also
/// reports the elevation the clamped angles actually achieve. All
/// computation is synchronous and free of side effects. The `profile`
/// module provides the `ArmProfile` entry point which runs the whole
/// pipeline for one target and returns the result as a single `Solution`.
///
/// Rendering, input widgets and servo transport are not part of this
/// library. Consumers feed it elevation values and draw or drive whatever
/// they like with the returned angles and points.
pub mod algorithm;
pub mod error;
pub mod joint;
pub mod pose;
pub mod profile;

pub use nalgebra;

pub use self::error::Error;

/// Brachium core module containing various constants.
pub mod consts {
    /// Brachium core version.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// Shoulder and elbow segment length in millimeters.
    pub const SEGMENT_LENGTH: f32 = 96.0;
    /// End effector length in millimeters.
    pub const EFFECTOR_LENGTH: f32 = 160.0;

    /// Lower joint angle limit in degrees.
    pub const ANGLE_MIN: f32 = -125.0;
    /// Upper joint angle limit in degrees.
    pub const ANGLE_MAX: f32 = 125.0;

    /// Lower end of the interactive elevation range in degrees.
    pub const ELEVATION_MIN: f32 = -90.0;
    /// Upper end of the interactive elevation range in degrees.
    pub const ELEVATION_MAX: f32 = 90.0;
}
