use tracing::info;

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{Admin, User};
use crate::store::{Collection, Store};
use crate::utils::password::hash_password;

/// Ensures the configured superadmin and admin accounts exist in both the
/// user and admin collections. Runs once at startup before the server
/// accepts requests; matching records are looked up by email and never
/// overwritten, so repeated runs are no-ops.
pub async fn ensure_privileged_accounts(store: &Store, config: &Config) -> AppResult<()> {
    seed_users(store, config).await?;
    seed_admins(store, config).await?;
    Ok(())
}

async fn seed_users(store: &Store, config: &Config) -> AppResult<()> {
    let users: Vec<User> = store.read(Collection::Users).await?;
    let missing_superadmin = !users.iter().any(|u| u.email == config.superadmin_email);
    let missing_admin = !users.iter().any(|u| u.email == config.admin_email);
    if !missing_superadmin && !missing_admin {
        return Ok(());
    }

    let superadmin = missing_superadmin.then(|| {
        hash_password(&config.superadmin_password).map(|password| User {
            id: config.superadmin_id.clone(),
            name: config.superadmin_name.clone(),
            email: config.superadmin_email.clone(),
            password,
            role: "superadmin".to_string(),
        })
    });
    let superadmin = superadmin.transpose()?;

    let admin = missing_admin.then(|| {
        hash_password(&config.admin_password).map(|password| User {
            id: config.admin_id.clone(),
            name: config.admin_name.clone(),
            email: config.admin_email.clone(),
            password,
            role: "admin".to_string(),
        })
    });
    let admin = admin.transpose()?;

    store
        .update(Collection::Users, move |users: &mut Vec<User>| {
            if let Some(superadmin) = superadmin {
                if !users.iter().any(|u| u.email == superadmin.email) {
                    info!("Seeding superadmin user {}", superadmin.email);
                    users.insert(0, superadmin);
                }
            }
            if let Some(admin) = admin {
                if !users.iter().any(|u| u.email == admin.email) {
                    info!("Seeding admin user {}", admin.email);
                    users.insert(0, admin);
                }
            }
            Ok(())
        })
        .await
}

async fn seed_admins(store: &Store, config: &Config) -> AppResult<()> {
    let admins: Vec<Admin> = store.read(Collection::Admins).await?;
    let missing_superadmin = !admins.iter().any(|a| a.email == config.superadmin_email);
    let missing_admin = !admins.iter().any(|a| a.email == config.admin_email);
    if !missing_superadmin && !missing_admin {
        return Ok(());
    }

    let superadmin = missing_superadmin.then(|| Admin {
        id: config.superadmin_id.clone(),
        name: config.superadmin_name.clone(),
        email: config.superadmin_email.clone(),
        role: "superadmin".to_string(),
    });
    let admin = missing_admin.then(|| Admin {
        id: config.admin_id.clone(),
        name: config.admin_name.clone(),
        email: config.admin_email.clone(),
        role: "admin".to_string(),
    });

    store
        .update(Collection::Admins, move |admins: &mut Vec<Admin>| {
            if let Some(superadmin) = superadmin {
                if !admins.iter().any(|a| a.email == superadmin.email) {
                    admins.insert(0, superadmin);
                }
            }
            if let Some(admin) = admin {
                if !admins.iter().any(|a| a.email == admin.email) {
                    admins.push(admin);
                }
            }
            Ok(())
        })
        .await
}
