mod health;
mod helpers;
mod rate_limit;
mod services;
mod site;
