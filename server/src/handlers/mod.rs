pub mod site_handlers;
