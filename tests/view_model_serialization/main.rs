//! View Model Serialization Test Suite
//!
//! End-to-end tests for the vmwire facade: view models declared with
//! `SchemaBuilder`, encoded and populated through `ContractResolver`.
//!
//! ## Key Verification Points
//!
//! 1. Commands and void actions are written as `null`
//! 2. Reactive properties are written as their inner value
//! 3. Ignore markers and ignore sets both remove properties
//! 4. Incoming JSON never reaches commands or reactive properties
//! 5. One resolver can serve concurrent passes
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test view_model_serialization
//! ```

use once_cell::sync::Lazy;
use std::any::Any;
use std::sync::Arc;

use vmwire::prelude::*;

// Test modules
mod concurrency;
mod filtering;
mod populate;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// Route `tracing` output through the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

// =============================================================================
// VIEW MODELS
// =============================================================================

/// Name, a command, and a reactive age
pub struct Person {
    pub name: String,
    pub save: RelayCommand,
    pub age: ReactiveProperty<i32>,
}

impl Person {
    pub fn alice() -> Self {
        Self {
            name: "Alice".into(),
            save: RelayCommand::new(|_| {}),
            age: ReactiveProperty::new(30),
        }
    }
}

static PERSON: Lazy<Arc<Schema>> = Lazy::new(|| {
    Arc::new(
        SchemaBuilder::<Person>::new()
            .property_mut("Name", |p: &Person| &p.name, |p: &mut Person| &mut p.name)
            .property("Save", |p: &Person| &p.save)
            .property("Age", |p: &Person| &p.age)
            .build()
            .unwrap(),
    )
});

impl ViewModel for Person {
    fn schema(&self) -> Arc<Schema> {
        PERSON.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Login form whose password carries an ignore marker
pub struct Login {
    pub user: String,
    pub password: String,
    pub submit: Action,
}

impl Login {
    pub fn sample() -> Self {
        Self {
            user: "alice".into(),
            password: "hunter2".into(),
            submit: Action::new(|()| {}),
        }
    }
}

static LOGIN: Lazy<Arc<Schema>> = Lazy::new(|| {
    Arc::new(
        SchemaBuilder::<Login>::new()
            .property_mut("User", |l: &Login| &l.user, |l: &mut Login| &mut l.user)
            .property_mut_with(
                "Password",
                MemberOptions::new().ignore(),
                |l: &Login| &l.password,
                |l: &mut Login| &mut l.password,
            )
            .property("Submit", |l: &Login| &l.submit)
            .build()
            .unwrap(),
    )
});

impl ViewModel for Login {
    fn schema(&self) -> Arc<Schema> {
        LOGIN.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Plain nested view model
#[derive(Clone)]
pub struct Address {
    pub city: String,
    pub zip: Option<String>,
}

static ADDRESS: Lazy<Arc<Schema>> = Lazy::new(|| {
    Arc::new(
        SchemaBuilder::<Address>::new()
            .property("City", |a: &Address| &a.city)
            .property("Zip", |a: &Address| &a.zip)
            .build()
            .unwrap(),
    )
});

impl ViewModel for Address {
    fn schema(&self) -> Arc<Schema> {
        ADDRESS.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Page holding a reactive view model, a list, and a skipped delegate
pub struct Page {
    pub title: String,
    pub address: ReactiveProperty<Address>,
    pub history: Vec<String>,
    pub refresh: Delegate<(), bool>,
}

impl Page {
    pub fn sample() -> Self {
        Self {
            title: "Home".into(),
            address: ReactiveProperty::new(Address {
                city: "Oslo".into(),
                zip: None,
            }),
            history: vec!["a".into(), "b".into()],
            refresh: Delegate::new(|()| true),
        }
    }
}

static PAGE: Lazy<Arc<Schema>> = Lazy::new(|| {
    Arc::new(
        SchemaBuilder::<Page>::new()
            .property("Title", |p: &Page| &p.title)
            .property("Address", |p: &Page| &p.address)
            .property("History", |p: &Page| &p.history)
            .property_with("Refresh", MemberOptions::new().skip(), |p: &Page| {
                &p.refresh
            })
            .build()
            .unwrap(),
    )
});

impl ViewModel for Page {
    fn schema(&self) -> Arc<Schema> {
        PAGE.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl_reflect_view_model!(Person, Login, Address, Page);
