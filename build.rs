// Copyright 2026 procname Developers
// SPDX-License-Identifier: LGPL-2.1-or-later

use cfg_aliases::cfg_aliases;

fn main() {
    cfg_aliases! {
        linux_like: { any(target_os = "linux", target_os = "android") },
        glibc_init_array: { all(target_os = "linux", target_env = "gnu") },
    }
}
