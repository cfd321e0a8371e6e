//! Random display names for the demo button.

use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "Amber", "Brave", "Calm", "Clever", "Crimson", "Daring", "Eager", "Gentle", "Golden", "Hidden",
    "Jolly", "Lucky", "Mellow", "Nimble", "Quiet", "Rapid", "Silver", "Sunny", "Velvet", "Witty",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Alan", "Amara", "Ansel", "Beatrix", "Bruno", "Camille", "Cyrus", "Dalia", "Dorian",
    "Elena", "Emeric", "Farah", "Felix", "Greta", "Gideon", "Hana", "Hugo", "Ines", "Ivo",
    "Juno", "Jasper", "Kira", "Kenji", "Lena", "Lucas", "Mira", "Milo", "Nadia", "Nico",
    "Olga", "Oscar", "Priya", "Piet", "Rosa", "Rafael", "Selma", "Tobias", "Vera", "Yusuf",
];

const LAST_NAMES: &[&str] = &[
    "Abara", "Bergstrom", "Castellanos", "Dubois", "Eriksen", "Fontaine", "Galloway", "Hartmann",
    "Ibarra", "Jovanovic", "Kowalski", "Lindqvist", "Moreau", "Nakamura", "Okafor", "Petrov",
    "Quintero", "Rasmussen", "Schneider", "Takahashi", "Underwood", "Valdez", "Whitaker", "Zeller",
];

/// An "Adjective First Last" name drawn from the thread-local generator.
pub fn random_name() -> String {
    random_name_with(&mut rand::thread_rng())
}

pub fn random_name_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let first = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
    let last = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];
    format!("{} {} {}", adjective, first, last)
}
