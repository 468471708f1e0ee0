pub mod cell;
pub mod direction;
pub mod follower;
pub mod json_utils;
pub mod loader;
pub mod map;
pub mod player;
pub mod validator;
pub mod walls;
