// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Deterministic demo data: two superhero teams, their members, a few
//! activities each, and a set of suggested workouts.
//!
//! Values are derived from indices so every run produces the same roster.

use crate::models::{Activity, Team, User, Workout};
use chrono::{DateTime, Duration, Utc};

const TEAM_MARVEL: &str = "Team Marvel";
const TEAM_DC: &str = "Team DC";

const MARVEL_HEROES: [(&str, &str); 6] = [
    ("Iron Man", "tony.stark@marvel.com"),
    ("Captain America", "steve.rogers@marvel.com"),
    ("Thor", "thor.odinson@marvel.com"),
    ("Black Widow", "natasha.romanoff@marvel.com"),
    ("Hulk", "bruce.banner@marvel.com"),
    ("Spider-Man", "peter.parker@marvel.com"),
];

const DC_HEROES: [(&str, &str); 6] = [
    ("Superman", "clark.kent@dc.com"),
    ("Batman", "bruce.wayne@dc.com"),
    ("Wonder Woman", "diana.prince@dc.com"),
    ("The Flash", "barry.allen@dc.com"),
    ("Aquaman", "arthur.curry@dc.com"),
    ("Green Lantern", "hal.jordan@dc.com"),
];

const ACTIVITY_TYPES: [&str; 8] = [
    "Running",
    "Swimming",
    "Cycling",
    "Weight Training",
    "Yoga",
    "Boxing",
    "HIIT",
    "CrossFit",
];

/// Everything the populate command writes.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub teams: Vec<Team>,
    pub users: Vec<User>,
    pub activities: Vec<Activity>,
    pub workouts: Vec<Workout>,
}

/// Build the demo roster relative to `now`.
pub fn superhero_roster(now: DateTime<Utc>) -> SeedData {
    let teams = vec![
        Team {
            name: TEAM_MARVEL.to_string(),
            description: "Earth's Mightiest Heroes".to_string(),
            created_at: now,
        },
        Team {
            name: TEAM_DC.to_string(),
            description: "Justice League of America".to_string(),
            created_at: now,
        },
    ];

    let users: Vec<User> = MARVEL_HEROES
        .iter()
        .map(|hero| (hero, TEAM_MARVEL))
        .chain(DC_HEROES.iter().map(|hero| (hero, TEAM_DC)))
        .map(|((name, email), team)| User {
            email: email.to_string(),
            name: name.to_string(),
            team: team.to_string(),
            created_at: now,
        })
        .collect();

    let activities = users
        .iter()
        .enumerate()
        .flat_map(|(i, user)| {
            // 3-5 activities per user
            let count = 3 + i % 3;
            (0..count).map(move |j| {
                let duration = 20 + ((i * 37 + j * 53) % 71) as u32; // 20..=90
                let factor = 8 + ((i * 11 + j * 7) % 8) as u32; // 8..=15
                let days_ago = ((i * 5 + j * 13) % 31) as i64;
                Activity {
                    user_email: user.email.clone(),
                    activity_type: ACTIVITY_TYPES[(i + j * 3) % ACTIVITY_TYPES.len()].to_string(),
                    duration_minutes: duration,
                    calories: duration * factor,
                    // The hour offset keeps dates unique per user
                    date: now - Duration::days(days_ago) - Duration::hours(j as i64),
                }
            })
        })
        .collect();

    SeedData {
        teams,
        users,
        activities,
        workouts: workouts(),
    }
}

fn workouts() -> Vec<Workout> {
    [
        (
            "Super Soldier Strength Training",
            "Captain America's intensive strength building routine focusing on functional fitness",
            "Hard",
            60,
            "Full body, Core, Legs",
        ),
        (
            "Asgardian Warrior Workout",
            "Thor's legendary training regimen combining power and endurance",
            "Extreme",
            75,
            "Chest, Back, Shoulders, Arms",
        ),
        (
            "Speedster Sprint Circuit",
            "The Flash's high-intensity cardio and speed training program",
            "Medium",
            45,
            "Legs, Cardio, Core",
        ),
        (
            "Amazonian Combat Training",
            "Wonder Woman's warrior training focusing on combat readiness",
            "Hard",
            60,
            "Full body, Core, Arms",
        ),
        (
            "Web-Slinger Agility",
            "Spider-Man's agility and flexibility focused workout",
            "Medium",
            40,
            "Core, Flexibility, Balance",
        ),
        (
            "Dark Knight Conditioning",
            "Batman's comprehensive conditioning program for peak performance",
            "Hard",
            70,
            "Full body, Core, Cardio",
        ),
        (
            "Atlantean Aqua Fitness",
            "Aquaman's water-based endurance and strength training",
            "Medium",
            50,
            "Shoulders, Back, Core",
        ),
        (
            "Arc Reactor Energy Blast",
            "Iron Man's high-tech HIIT workout for maximum calorie burn",
            "Hard",
            35,
            "Full body, Cardio",
        ),
    ]
    .into_iter()
    .map(
        |(name, description, difficulty, duration, target_muscles)| Workout {
            name: name.to_string(),
            description: description.to_string(),
            difficulty: difficulty.to_string(),
            duration_minutes: duration,
            target_muscles: target_muscles.to_string(),
        },
    )
    .collect()
}
