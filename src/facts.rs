//! "Did you know?" panel content.

pub const SPACE_FACTS: [&str; 5] = [
    "A day on Venus is longer than a year on Venus.",
    "Neutron stars can spin 600 times per second.",
    "Saturn could float in water because it's less dense.",
    "One million Earths could fit inside the Sun.",
    "The footprints on the Moon will last millions of years.",
];

/// Picks one fact at random.
pub fn random_fact() -> &'static str {
    let roll = uuid::Uuid::new_v4().as_u128();
    fact_for(roll)
}

fn fact_for(roll: u128) -> &'static str {
    SPACE_FACTS[(roll % SPACE_FACTS.len() as u128) as usize]
}
