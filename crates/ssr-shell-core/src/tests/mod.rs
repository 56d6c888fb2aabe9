mod controller;
mod menu;
