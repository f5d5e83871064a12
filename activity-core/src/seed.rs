//! The activity catalog loaded at startup.
//!
//! Nine activities, each with a small pre-enrolled roster from the
//! `mergington.edu` domain.

use indexmap::IndexMap;

use crate::activity::Activity;

/// Returns the startup catalog in display order.
#[must_use]
pub fn seed_activities() -> IndexMap<String, Activity> {
    let entries = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Competitive basketball training and games",
                "Mondays and Thursdays, 4:00 PM - 5:30 PM",
                15,
            )
            .with_participants(["alex@mergington.edu"]),
        ),
        (
            "Tennis Club",
            Activity::new(
                "Tennis coaching and match play",
                "Wednesdays and Saturdays, 3:00 PM - 4:30 PM",
                10,
            )
            .with_participants(["sarah@mergington.edu", "james@mergington.edu"]),
        ),
        (
            "Debate Club",
            Activity::new(
                "Develop critical thinking and public speaking skills",
                "Tuesdays, 3:30 PM - 4:45 PM",
                18,
            )
            .with_participants(["rachel@mergington.edu", "mark@mergington.edu"]),
        ),
        (
            "Robotics Club",
            Activity::new(
                "Design, build, and program competitive robots",
                "Wednesdays and Fridays, 4:00 PM - 5:30 PM",
                16,
            )
            .with_participants(["david@mergington.edu"]),
        ),
        (
            "Art Studio",
            Activity::new(
                "Painting, drawing, and sculpture techniques",
                "Mondays and Wednesdays, 3:30 PM - 4:45 PM",
                14,
            )
            .with_participants(["grace@mergington.edu", "lucas@mergington.edu"]),
        ),
        (
            "Jazz Band",
            Activity::new(
                "Learn and perform jazz music",
                "Thursdays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(["noah@mergington.edu"]),
        ),
    ];

    entries
        .into_iter()
        .map(|(name, activity)| (name.to_owned(), activity))
        .collect()
}
