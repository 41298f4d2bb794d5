//! View models shared by the encode/decode tests.

use once_cell::sync::Lazy;
use std::any::Any;
use std::sync::Arc;
use vmwire_core::{
    impl_reflect_view_model, MemberOptions, RelayCommand, Schema, SchemaBuilder, ViewModel,
};

pub(crate) struct Contact {
    pub name: String,
    pub email: String,
    pub tags: Vec<String>,
}

impl Contact {
    pub fn new(name: &str, email: &str) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            tags: Vec::new(),
        }
    }
}

static CONTACT: Lazy<Arc<Schema>> = Lazy::new(|| {
    Arc::new(
        SchemaBuilder::<Contact>::new()
            .property_mut("Name", |c: &Contact| &c.name, |c: &mut Contact| &mut c.name)
            .property_mut("Email", |c: &Contact| &c.email, |c: &mut Contact| &mut c.email)
            .property("Tags", |c: &Contact| &c.tags)
            .build()
            .unwrap(),
    )
});

impl ViewModel for Contact {
    fn schema(&self) -> Arc<Schema> {
        CONTACT.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub(crate) struct Profile {
    pub primary: Contact,
    pub others: Vec<Contact>,
    pub nickname: Option<String>,
    pub draft: String,
}

impl Profile {
    pub fn sample() -> Self {
        let mut carol = Contact::new("Carol", "c@example.com");
        carol.tags.push("x".into());
        Self {
            primary: Contact::new("Alice", "a@example.com"),
            others: vec![Contact::new("Bob", "b@example.com"), carol],
            nickname: None,
            draft: "unsaved".into(),
        }
    }
}

static PROFILE: Lazy<Arc<Schema>> = Lazy::new(|| {
    Arc::new(
        SchemaBuilder::<Profile>::new()
            .property("Primary", |p: &Profile| &p.primary)
            .property("Others", |p: &Profile| &p.others)
            .property_mut(
                "Nickname",
                |p: &Profile| &p.nickname,
                |p: &mut Profile| &mut p.nickname,
            )
            .property_mut_with(
                "Draft",
                MemberOptions::new().skip(),
                |p: &Profile| &p.draft,
                |p: &mut Profile| &mut p.draft,
            )
            .build()
            .unwrap(),
    )
});

impl ViewModel for Profile {
    fn schema(&self) -> Arc<Schema> {
        PROFILE.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub(crate) struct Toolbar {
    pub title: String,
    pub undo: RelayCommand,
    pub redo: RelayCommand,
}

impl Toolbar {
    pub fn sample() -> Self {
        Self {
            title: "Edit".into(),
            undo: RelayCommand::new(|_| {}),
            redo: RelayCommand::new(|_| {}),
        }
    }
}

static TOOLBAR: Lazy<Arc<Schema>> = Lazy::new(|| {
    Arc::new(
        SchemaBuilder::<Toolbar>::new()
            .property("Title", |t: &Toolbar| &t.title)
            .property("Undo", |t: &Toolbar| &t.undo)
            .property("Redo", |t: &Toolbar| &t.redo)
            .build()
            .unwrap(),
    )
});

impl ViewModel for Toolbar {
    fn schema(&self) -> Arc<Schema> {
        TOOLBAR.clone()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl_reflect_view_model!(Contact, Profile, Toolbar);
