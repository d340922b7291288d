//! Persistence for the user roster and the current session.

use crate::shared::data::local_db;
use contracts::system::users::{User, UserRole};

const USERS_KEY: &str = "app_users";
const SESSION_KEY: &str = "current_user_id";

/// Default roster for a fresh device. Access codes are meant to be changed
/// by the superuser right after the rollout.
fn initial_users() -> Vec<User> {
    let mut superuser = User::new(
        "Super User".to_string(),
        "111111".to_string(),
        UserRole::Superuser,
    );
    superuser.nik = Some("000000".to_string());
    superuser.wa_number = Some("081234567890".to_string());

    let mut users = vec![superuser];
    for i in 2..=9 {
        users.push(User::new(
            format!("User {}", i),
            format!("{0}{0}{0}{0}{0}{0}", i),
            UserRole::User,
        ));
    }
    users
}

/// Load the roster, seeding the defaults on first run.
pub fn load_users() -> Vec<User> {
    if let Some(raw) = local_db::read_raw(USERS_KEY) {
        match serde_json::from_str(&raw) {
            Ok(users) => return users,
            Err(err) => log::warn!("failed to parse user roster: {}", err),
        }
    }
    let users = initial_users();
    save_users(&users);
    users
}

pub fn save_users(users: &[User]) {
    match serde_json::to_string(users) {
        Ok(json) => local_db::write_raw(USERS_KEY, &json),
        Err(err) => log::error!("failed to serialize user roster: {}", err),
    }
}

pub fn save_session(user_id: &str) {
    local_db::write_raw(SESSION_KEY, user_id);
}

pub fn get_session() -> Option<String> {
    local_db::read_raw(SESSION_KEY)
}

pub fn clear_session() {
    local_db::remove_raw(SESSION_KEY);
}
