use crate::cli::commands::{load_data, save_data};
use crate::cli::parser::VendorAction;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Vendor;
use crate::ui::messages::{success, warning};
use crate::utils::table::Table;

pub fn handle(action: &VendorAction, cfg: &Config) -> AppResult<()> {
    match action {
        VendorAction::Add {
            name,
            category,
            contact,
            email,
            phone,
            status,
        } => {
            let mut data = load_data(cfg)?;
            data.vendors.push(Vendor {
                name: name.clone(),
                category: category.clone(),
                contact_name: contact.clone(),
                email: email.clone(),
                phone: phone.clone(),
                status: status.clone(),
            });
            save_data(cfg, &data)?;

            success(format!("Vendor '{name}' added ({status})"));
        }

        VendorAction::List => {
            let data = load_data(cfg)?;

            if data.vendors.is_empty() {
                println!("No vendors yet. Add one with `runsheet vendor add <NAME> <CATEGORY>`.");
                return Ok(());
            }

            let mut table =
                Table::new(vec!["name", "category", "contact", "email", "phone", "status"]);
            for v in &data.vendors {
                table.add_row(vec![
                    v.name.clone(),
                    v.category.clone(),
                    v.contact_name.clone().unwrap_or_default(),
                    v.email.clone().unwrap_or_default(),
                    v.phone.clone().unwrap_or_default(),
                    v.status.clone(),
                ]);
            }
            print!("{}", table.render());
        }

        VendorAction::Del { name } => {
            let mut data = load_data(cfg)?;
            let before = data.vendors.len();
            data.vendors.retain(|v| v.name != *name);

            if data.vendors.len() == before {
                warning(format!("No vendor named '{name}'"));
                return Ok(());
            }

            save_data(cfg, &data)?;
            success(format!("Vendor '{name}' deleted"));
        }
    }

    Ok(())
}
