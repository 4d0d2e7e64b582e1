// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod leaderboard;
pub mod resource;
pub mod team;
pub mod user;
pub mod workout;

pub use activity::Activity;
pub use leaderboard::Leaderboard;
pub use resource::Resource;
pub use team::Team;
pub use user::User;
pub use workout::Workout;
