pub mod evolution;
