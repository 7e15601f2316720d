pub mod clear_screen;
pub mod mouse_position;
pub mod seeded_rng;
