mod config;
mod monte_carlo;
