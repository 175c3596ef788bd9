pub mod player_movement;
