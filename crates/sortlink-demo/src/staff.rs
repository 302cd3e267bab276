//! Demo data set and its ordering. Applying the requested sort is the
//! application's job; the link helper only renders the headers.

use sortlink_axum::CurrentSort;
use sortlink_core::types::Direction;

#[derive(Debug, Clone)]
pub struct Staff {
    pub name: &'static str,
    pub team: &'static str,
    pub age: u32,
    pub joined: &'static str,
}

pub fn roster() -> Vec<Staff> {
    vec![
        Staff { name: "Amara Okafor", team: "Platform", age: 34, joined: "2019-03-11" },
        Staff { name: "Bram Visser", team: "Design", age: 29, joined: "2021-07-01" },
        Staff { name: "Carmen Ruiz", team: "Platform", age: 41, joined: "2017-10-23" },
        Staff { name: "Divya Nair", team: "Support", age: 26, joined: "2023-01-16" },
        Staff { name: "Emil Larsen", team: "Design", age: 37, joined: "2018-05-02" },
        Staff { name: "Farid Haddad", team: "Support", age: 31, joined: "2020-11-09" },
        Staff { name: "Greta Keller", team: "Platform", age: 45, joined: "2016-02-29" },
        Staff { name: "Hana Sato", team: "Design", age: 28, joined: "2022-08-15" },
    ]
}

/// Order the roster by the requested key, if it is one we know how to sort.
pub fn order(rows: &mut [Staff], current: &CurrentSort) {
    let Some(key) = &current.sort else {
        return;
    };
    match key.raw() {
        "name" => rows.sort_by(|a, b| a.name.cmp(b.name)),
        "team.name" => rows.sort_by(|a, b| a.team.cmp(b.team)),
        "age" => rows.sort_by(|a, b| a.age.cmp(&b.age)),
        "joined" => rows.sort_by(|a, b| a.joined.cmp(b.joined)),
        _ => return,
    }
    if current.direction.unwrap_or(Direction::Asc) == Direction::Desc {
        rows.reverse();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
