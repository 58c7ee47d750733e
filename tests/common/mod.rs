//! Shared test utilities and recording seams.

#![allow(dead_code)]

pub mod mock_backend;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use venue_console::nav::{Route, RouteTable, Shell};
use venue_console::notify::Notifier;
use venue_console::session::{MemoryStorage, Storage, StorageError};
use venue_console::{ApiClient, Flavor};

/// Notifier that records every message for assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn error(&self, message: &str) {
        self.messages.lock().push(message.to_string());
    }
}

/// Shell that records pushed paths and applied titles.
#[derive(Default)]
pub struct RecordingShell {
    pushes: Mutex<Vec<String>>,
    titles: Mutex<Vec<String>>,
}

impl RecordingShell {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn pushes(&self) -> Vec<String> {
        self.pushes.lock().clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.titles.lock().clone()
    }
}

impl Shell for RecordingShell {
    fn push(&self, path: &str) {
        self.pushes.lock().push(path.to_string());
    }

    fn set_title(&self, title: &str) {
        self.titles.lock().push(title.to_string());
    }
}

/// Storage wrapper that counts removals, for clear-idempotence assertions.
#[derive(Default)]
pub struct CountingStorage {
    inner: MemoryStorage,
    removals: AtomicUsize,
}

impl CountingStorage {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn removals(&self) -> usize {
        self.removals.load(Ordering::SeqCst)
    }
}

impl Storage for CountingStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.removals.fetch_add(1, Ordering::SeqCst);
        self.inner.remove(key)
    }
}

/// Route table matching the operator console.
pub fn admin_routes() -> RouteTable {
    RouteTable::new(vec![
        Route::new("/login", "Login", false),
        Route::new("/venue/list", "Venues", true),
        Route::new("/venue/detail/:id", "Venue Detail", true),
        Route::new("/dashboard", "Dashboard", true),
    ])
}

/// Route table matching the merchant console.
pub fn merchant_routes() -> RouteTable {
    RouteTable::new(vec![
        Route::new("/login", "Merchant Login", false),
        Route::new("/dashboard", "Dashboard", true),
        Route::new("/venue/list", "My Venues", true),
        Route::new("/venue/detail/:id", "Venue Detail", true),
    ])
}

fn routes_for(flavor: Flavor) -> RouteTable {
    match flavor {
        Flavor::Admin => admin_routes(),
        Flavor::Merchant => merchant_routes(),
    }
}

/// Fully wired client with recording seams, never touching real storage.
pub struct TestHarness {
    pub client: ApiClient,
    pub notifier: Arc<RecordingNotifier>,
    pub shell: Arc<RecordingShell>,
    pub storage: Arc<CountingStorage>,
}

pub fn harness(origin: &str, flavor: Flavor) -> TestHarness {
    let notifier = RecordingNotifier::new();
    let shell = RecordingShell::new();
    let storage = CountingStorage::new();
    let client = ApiClient::builder(origin, flavor)
        .storage(storage.clone())
        .notifier(notifier.clone())
        .shell(shell.clone())
        .routes(routes_for(flavor))
        .build();
    TestHarness {
        client,
        notifier,
        shell,
        storage,
    }
}
