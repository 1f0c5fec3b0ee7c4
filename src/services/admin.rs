use uuid::Uuid;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{Admin, AdminForm, User};
use crate::store::{Collection, Store};
use crate::utils::password::hash_password;

pub struct AdminService<'a> {
    store: &'a Store,
}

impl<'a> AdminService<'a> {
    pub fn new(store: &'a Store) -> Self {
        AdminService { store }
    }

    fn superadmin_record(config: &Config) -> Admin {
        Admin {
            id: config.superadmin_id.clone(),
            name: config.superadmin_name.clone(),
            email: config.superadmin_email.clone(),
            role: "superadmin".to_string(),
        }
    }

    /// The superadmin always appears first in the listing even when the
    /// stored collection lacks it; the synthesized row is not persisted.
    pub async fn list(&self, config: &Config) -> AppResult<Vec<Admin>> {
        let mut admins: Vec<Admin> = self.store.read(Collection::Admins).await?;
        if !admins.iter().any(|a| a.email == config.superadmin_email) {
            admins.insert(0, Self::superadmin_record(config));
        }
        Ok(admins)
    }

    /// Appends an admin/journalist plus a companion user account carrying
    /// the configured administrator password. The two collection writes are
    /// independent steps; there is no transaction spanning them.
    pub async fn create(&self, config: &Config, form: AdminForm) -> AppResult<Admin> {
        if form.email == config.superadmin_email {
            return Err(AppError::Validation(
                "The superadmin cannot be added".to_string(),
            ));
        }
        let role = form.role.unwrap_or_else(|| "admin".to_string());
        if role != "admin" && role != "journalist" {
            return Err(AppError::Validation(
                "Only admin or journalist roles can be added".to_string(),
            ));
        }

        let admin = Admin {
            id: Uuid::new_v4().to_string(),
            name: form.name,
            email: form.email,
            role,
        };

        let record = admin.clone();
        self.store
            .update(Collection::Admins, move |admins: &mut Vec<Admin>| {
                if admins.iter().any(|a| a.email == record.email) {
                    return Err(AppError::Validation(
                        "An admin with this email already exists".to_string(),
                    ));
                }
                admins.push(record);
                Ok(())
            })
            .await?;

        let companion = User {
            id: admin.id.clone(),
            name: admin.name.clone(),
            email: admin.email.clone(),
            password: hash_password(&config.admin_password)?,
            role: admin.role.clone(),
        };
        self.store
            .update(Collection::Users, move |users: &mut Vec<User>| {
                users.push(companion);
                Ok(())
            })
            .await?;

        Ok(admin)
    }

    /// Removes by id, except that a record carrying the superadmin's email is
    /// unremovable: it is filtered back in (and persisted) if the resulting
    /// collection lacks one.
    pub async fn delete(&self, config: &Config, id: &str) -> AppResult<()> {
        let id = id.to_string();
        let superadmin = Self::superadmin_record(config);
        self.store
            .update(Collection::Admins, move |admins: &mut Vec<Admin>| {
                if !admins.iter().any(|a| a.id == id) {
                    return Err(AppError::NotFound("Admin not found".to_string()));
                }
                admins.retain(|a| a.id != id && a.email != superadmin.email);
                if !admins.iter().any(|a| a.email == superadmin.email) {
                    admins.insert(0, superadmin);
                }
                Ok(())
            })
            .await
    }
}
