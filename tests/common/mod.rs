#![allow(dead_code)]

use async_trait::async_trait;
use recipe_extractor::providers::{CompletionProvider, ProviderError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Completion provider that replays a canned reply and records what it was sent
pub struct FakeProvider {
    reply: Result<String, u16>,
    calls: AtomicUsize,
    last_messages: Mutex<Option<(String, String)>>,
}

impl FakeProvider {
    pub fn replying(content: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(content.to_string()),
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(None),
        })
    }

    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(status),
            calls: AtomicUsize::new(0),
            last_messages: Mutex::new(None),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The (system, user) pair of the most recent call
    pub fn last_messages(&self) -> Option<(String, String)> {
        self.last_messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for FakeProvider {
    fn provider_name(&self) -> &str {
        "fake"
    }

    async fn complete(&self, system: &str, user: &str) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_messages.lock().unwrap() = Some((system.to_string(), user.to_string()));

        match &self.reply {
            Ok(content) => Ok(content.clone()),
            Err(status) => Err(ProviderError::Status {
                status: *status,
                body: "provider failure".to_string(),
            }),
        }
    }
}

pub const PANCAKE_REPLY: &str = r#"{
    "title": "Simple Pancakes",
    "ingredients": ["2 eggs", "1 cup flour"],
    "steps": ["Mix the eggs and flour", "Bake at 350F for 20 minutes"],
    "cuisine": "American",
    "image": "",
    "sourceUrl": "https://b.example/y"
}"#;

/// A page whose main region carries a full recipe
pub fn recipe_page() -> String {
    r#"
    <!DOCTYPE html>
    <html>
    <head>
        <title>Simple Pancakes</title>
        <style>.recipe { font-weight: bold; }</style>
        <script>window.analytics = {track: function() {}};</script>
    </head>
    <body>
        <nav>Home | Breakfast | Dinner</nav>
        <main>
            <h1>Simple Pancakes</h1>
            <ul>
                <li>2 eggs</li>
                <li>1 cup flour</li>
            </ul>
            <p>Mix the eggs and flour.</p>
            <p>Bake at 350F for 20 minutes.</p>
        </main>
        <footer>Copyright</footer>
    </body>
    </html>
    "#
    .to_string()
}

/// A page that has almost no text once scripts are removed
pub fn thin_page() -> String {
    r#"
    <html>
    <body>
        <div id="app"></div>
        <script>
            renderRecipe({title: "Simple Pancakes", ingredients: ["2 eggs", "1 cup flour"]});
        </script>
        <noscript>Enable JS</noscript>
    </body>
    </html>
    "#
    .to_string()
}
