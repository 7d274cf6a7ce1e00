mod manager;
mod scenario;
