// Admin user management: paginated listing with search/filter, and the
// ban/unban state machine. Banning another admin is refused server-side.

pub mod actions;
pub mod guard;
pub mod handlers;
pub mod listing;
pub mod store;
