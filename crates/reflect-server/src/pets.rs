//! The values served by the `/dogs` and `/cats` endpoints.

use chrono::{Datelike, Local, Weekday};
use graphql_reflect::{record, Computed};

#[derive(Debug, Clone)]
pub(crate) struct Cat {
    pub name: String,
    pub age: u32,
    pub color: String,
}

record!(Cat { name, age, color });

#[derive(Debug, Clone)]
pub(crate) struct Dog {
    pub name: String,
    pub age: u32,
    pub color: String,
    pub friend: Cat,
    /// Evaluated on every query, so the answer can change from one day to the next.
    pub enemies: Computed<Dog, Vec<Cat>>,
}

record!(Dog { name, age, color, friend, enemies });

fn cat(name: &str, age: u32, color: &str) -> Cat {
    Cat {
        name: name.to_owned(),
        age,
        color: color.to_owned(),
    }
}

pub(crate) fn cats() -> Vec<Cat> {
    vec![cat("Maru", 3, "White"), cat("Hana", 1, "Gray"), cat("Lily", 2, "Black")]
}

pub(crate) fn dogs() -> Vec<Dog> {
    let cats = cats();
    let hated = cats[1..2].to_vec();

    vec![
        Dog {
            name: "Bello".to_owned(),
            age: 2,
            color: "Black".to_owned(),
            friend: cats[0].clone(),
            // Bello hates Hana on Mondays.
            enemies: Computed::new(move |_: &Dog| {
                Ok(match Local::now().weekday() {
                    Weekday::Mon => hated.clone(),
                    _ => Vec::new(),
                })
            }),
        },
        Dog {
            name: "Momo".to_owned(),
            age: 3,
            color: "White".to_owned(),
            friend: cats[0].clone(),
            enemies: Computed::none(),
        },
        Dog {
            name: "Kuro".to_owned(),
            age: 1,
            color: "Gray".to_owned(),
            friend: cats[1].clone(),
            enemies: Computed::none(),
        },
    ]
}
