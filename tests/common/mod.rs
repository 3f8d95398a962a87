//! Shared fixtures for the integration suite

// Each integration binary compiles its own copy; not every binary uses
// every helper.
#![allow(dead_code)]

use rummage::{FieldSet, FieldValue, MemoryStore, Record};

/// A person entity with the attribute shape the search queries expect
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: u64,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub nickname: String,
}

impl Person {
    pub fn new(id: u64, first: &str, last: &str) -> Self {
        Person {
            id,
            first_name: first.to_string(),
            middle_name: String::new(),
            last_name: last.to_string(),
            nickname: String::new(),
        }
    }

    pub fn with_nickname(mut self, nickname: &str) -> Self {
        self.nickname = nickname.to_string();
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for Person {
    fn id(&self) -> u64 {
        self.id
    }

    fn attribute(&self, field: &str) -> Option<FieldValue> {
        match field {
            "first_name" => Some(FieldValue::Text(self.first_name.clone())),
            "middle_name" => Some(FieldValue::Text(self.middle_name.clone())),
            "last_name" => Some(FieldValue::Text(self.last_name.clone())),
            "nickname" => Some(FieldValue::Text(self.nickname.clone())),
            _ => None,
        }
    }
}

/// The field set user searches run against
pub fn name_fields() -> FieldSet {
    FieldSet::new(["first_name", "last_name", "nickname", "middle_name"])
}

/// Store with the canonical relevance fixture
pub fn donald_store() -> MemoryStore<Person> {
    let store = MemoryStore::new();
    store.insert(Person::new(1, "Donald", "Duck"));
    store.insert(Person::new(2, "Donald", "Smith"));
    store.insert(Person::new(3, "Lucy", "McDonald"));
    store
}
