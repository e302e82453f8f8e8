// Copyright 2026 procname Developers
// SPDX-License-Identifier: LGPL-2.1-or-later

// The argument region is process-wide, so everything runs in one test in a
// fixed order.

#![cfg(any(target_os = "linux", target_os = "android"))]

use procname::{Config, Error, Status, TruncationPolicy};

#[test]
fn renames_the_running_process() {
    assert_eq!(procname::get_name(), Err(Error::NotInitialized));
    assert_eq!(procname::set_name("early"), Err(Error::NotInitialized));
    assert!(!procname::is_available());

    procname::initialize().unwrap();
    procname::initialize().unwrap();
    assert!(procname::is_available());

    // A second init is a no-op, so the default truncating policy stays.
    procname::initialize_with(Config {
        truncation: TruncationPolicy::Reject,
        ..Config::default()
    })
    .unwrap();

    let capacity = procname::capacity().unwrap();
    assert!(capacity >= "worker-1".len());

    let status = procname::set_name("worker-1").unwrap();
    assert_eq!(procname::get_name().unwrap(), "worker-1");

    procname::set_name("aaaaaaaaaa").unwrap();
    procname::set_name("bb").unwrap();
    assert_eq!(procname::get_name().unwrap(), "bb");

    procname::set_name("bb").unwrap();
    assert_eq!(procname::get_name().unwrap(), "bb");

    let long = "x".repeat(capacity + 10);
    procname::set_name(&long).unwrap();
    assert_eq!(procname::get_name().unwrap(), "x".repeat(capacity));

    procname::set_name("worker\0secret").unwrap();
    assert_eq!(procname::get_name().unwrap(), "worker");
    let cmdline = procfs::process::Process::myself()
        .unwrap()
        .cmdline()
        .unwrap();
    assert_eq!(cmdline, vec!["worker".to_string()]);

    assert_eq!(status, Status::FullySet);

    procname::set_name("queue-consumer-primary").unwrap();
    let cmdline = procfs::process::Process::myself()
        .unwrap()
        .cmdline()
        .unwrap();
    assert_eq!(
        cmdline.first().map(String::as_str),
        Some("queue-consumer-primary")
    );
    assert_eq!(procname::kernel_name().unwrap(), "queue-consumer-");
    assert_eq!(
        rustix::thread::name().unwrap().to_bytes(),
        b"queue-consumer-"
    );
}
