//! Shared helpers for the integration and property tests

#![allow(dead_code)]

use std::cell::Cell;
use std::fmt;
use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Route `failable` events to the test writer once per test binary
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("failable=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// A declared failure carrying a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fault(pub String);

impl Fault {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for Fault {}

/// A scoped resource that counts its releases
#[derive(Debug)]
pub struct TestResource {
    name: String,
    fails: bool,
    releases: Cell<u32>,
}

impl TestResource {
    pub fn new(name: impl Into<String>, fails: bool) -> Self {
        Self {
            name: name.into(),
            fails,
            releases: Cell::new(0),
        }
    }

    pub fn release(&self) -> Result<(), Fault> {
        self.releases.set(self.releases.get() + 1);
        if self.fails {
            Err(Fault(format!("release {}", self.name)))
        } else {
            Ok(())
        }
    }

    pub fn releases(&self) -> u32 {
        self.releases.get()
    }

    pub fn fails(&self) -> bool {
        self.fails
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
