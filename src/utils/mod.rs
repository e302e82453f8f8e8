// Copyright 2026 procname Developers
// SPDX-License-Identifier: LGPL-2.1-or-later

pub mod log;

pub use self::log::*;
