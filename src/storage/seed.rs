//! Built-in phrase bank loaded into a fresh database

/// (text, category, difficulty)
pub const SEED_PHRASES: &[(&str, &str, &str)] = &[
    // Cowboy
    ("Saddle Up", "Cowboy", "easy"),
    ("Wild West", "Cowboy", "easy"),
    ("Howdy Partner", "Cowboy", "easy"),
    ("Ride Into The Sunset", "Cowboy", "medium"),
    ("High Noon Showdown", "Cowboy", "medium"),
    ("Tumbleweed Town", "Cowboy", "medium"),
    ("Rattlesnake Canyon Stampede", "Cowboy", "hard"),
    ("Quick Draw McGraw", "Cowboy", "hard"),
    // Pixar
    ("Toy Story", "Pixar", "easy"),
    ("Finding Nemo", "Pixar", "easy"),
    ("Monsters Inc", "Pixar", "easy"),
    ("The Incredibles", "Pixar", "medium"),
    ("To Infinity And Beyond", "Pixar", "medium"),
    ("Ratatouille", "Pixar", "medium"),
    ("Just Keep Swimming", "Pixar", "hard"),
    ("Lightning McQueen", "Pixar", "hard"),
    // Videogames
    ("Game Over", "Videogames", "easy"),
    ("Extra Life", "Videogames", "easy"),
    ("Power Up", "Videogames", "easy"),
    ("Princess In Another Castle", "Videogames", "medium"),
    ("Boss Battle", "Videogames", "medium"),
    ("Creeper Explosion", "Videogames", "medium"),
    ("Five Nights At Freddy's", "Videogames", "hard"),
    ("Jumping Bowser Fortress", "Videogames", "hard"),
    // Social
    ("Follow Back", "Social", "easy"),
    ("Going Viral", "Social", "easy"),
    ("Like And Subscribe", "Social", "medium"),
    ("Trending Hashtag", "Social", "medium"),
    ("Fear Of Missing Out", "Social", "hard"),
    ("Quirky Vlog Jukebox", "Social", "hard"),
    // Music
    ("Rock And Roll", "Music", "easy"),
    ("Drum Solo", "Music", "medium"),
    ("Jazz Quartet Improvisation", "Music", "hard"),
];
