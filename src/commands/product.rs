//! Product screen and its commands.
//!
//! [`ProductPage`] binds a [`ProductViewModel`] to the terminal: it loads the
//! products when the page appears and renders the shown list after each
//! command. Arguments left out on the command line are asked for
//! interactively.

use crate::{
    db::{context::DatabaseContext, filter::Filter},
    libs::{
        messages::Message,
        product::Product,
        view::View,
        view_model::{ConsoleNotifier, ProductViewModel},
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::sync::Arc;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Product name
    #[arg(short, long)]
    name: Option<String>,
    /// Product price
    #[arg(short, long)]
    price: Option<f64>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the product to edit
    id: Option<i64>,
    /// New name
    #[arg(short, long)]
    name: Option<String>,
    /// New price
    #[arg(short, long)]
    price: Option<f64>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the product to delete
    id: Option<i64>,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// ID of the product to show
    id: i64,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Part of the product name, matched literally
    #[arg(short, long)]
    name: Option<String>,
    /// Lowest price, inclusive
    #[arg(long)]
    min_price: Option<f64>,
    /// Highest price, inclusive
    #[arg(long)]
    max_price: Option<f64>,
}

impl SearchArgs {
    pub fn filter(&self) -> Filter {
        let mut filter = Filter::new();
        if let Some(name) = &self.name {
            filter = filter.contains("Name", name);
        }
        if let Some(min_price) = self.min_price {
            filter = filter.ge("Price", min_price);
        }
        if let Some(max_price) = self.max_price {
            filter = filter.le("Price", max_price);
        }
        filter
    }
}

/// The product list screen.
pub struct ProductPage {
    view_model: ProductViewModel,
}

impl ProductPage {
    pub fn new(context: DatabaseContext) -> Self {
        ProductPage {
            view_model: ProductViewModel::new(context, Arc::new(ConsoleNotifier)),
        }
    }

    pub fn view_model(&self) -> &ProductViewModel {
        &self.view_model
    }

    /// Populates the list when the page comes into view.
    pub async fn on_appearing(&mut self) -> Result<()> {
        self.view_model.load_products().await?;
        Ok(())
    }

    pub fn render(&self) -> Result<()> {
        let products = self.view_model.products();
        if products.is_empty() {
            msg_info!(Message::ProductsNotFound);
            return Ok(());
        }

        msg_print!(Message::ProductsHeader, true);
        View::products(products)
    }

    fn find(&self, id: i64) -> Option<Product> {
        self.view_model.products().iter().find(|p| p.id == id).cloned()
    }

    fn select(&self, prompt: Message) -> Result<Option<Product>> {
        let products = self.view_model.products();
        if products.is_empty() {
            msg_info!(Message::ProductsNotFound);
            return Ok(None);
        }

        let items: Vec<String> = products
            .iter()
            .map(|p| format!("#{} {} ({})", p.id, p.display_name(), View::price(p.price)))
            .collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt.to_string())
            .items(&items)
            .interact()?;

        Ok(Some(products[selection].clone()))
    }

    async fn add(&mut self, args: AddArgs) -> Result<()> {
        let name = match args.name {
            Some(name) => name,
            None => Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptProductName.to_string())
                .allow_empty(true)
                .interact_text()?,
        };
        let price = match args.price {
            Some(price) => price,
            None => Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptProductPrice.to_string())
                .interact_text()?,
        };

        self.view_model.set_operating_product(None);
        let product = self.view_model.operating_product_mut();
        product.name = Some(name.clone());
        product.price = price;

        if self.view_model.save_product().await? {
            msg_success!(Message::ProductCreated(name));
        }
        Ok(())
    }

    async fn edit(&mut self, args: EditArgs) -> Result<()> {
        let product = match args.id {
            Some(id) => match self.find(id) {
                Some(product) => product,
                None => {
                    msg_error!(Message::ProductNotFound(id));
                    return Ok(());
                }
            },
            None => match self.select(Message::SelectProductToEdit)? {
                Some(product) => product,
                None => return Ok(()),
            },
        };
        let interactive = args.name.is_none() && args.price.is_none();

        self.view_model.set_operating_product(Some(product.clone()));
        if interactive {
            msg_print!(Message::EditingProduct(product.display_name().to_string()), true);
        }

        let name = match args.name {
            Some(name) => name,
            None if interactive => Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptProductName.to_string())
                .default(product.display_name().to_string())
                .allow_empty(true)
                .interact_text()?,
            None => product.display_name().to_string(),
        };
        let price = match args.price {
            Some(price) => price,
            None if interactive => Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptProductPrice.to_string())
                .default(product.price)
                .interact_text()?,
            None => product.price,
        };

        let operating = self.view_model.operating_product_mut();
        operating.name = Some(name.clone());
        operating.price = price;

        if self.view_model.save_product().await? {
            msg_success!(Message::ProductUpdated(name));
        }
        Ok(())
    }

    async fn delete(&mut self, args: DeleteArgs) -> Result<()> {
        let (id, name) = match args.id {
            Some(id) => {
                let name = self.find(id).map(|p| p.display_name().to_string()).unwrap_or_else(|| format!("#{}", id));
                (id, name)
            }
            None => match self.select(Message::SelectProductToDelete)? {
                Some(product) => (product.id, product.display_name().to_string()),
                None => return Ok(()),
            },
        };

        if !args.yes {
            let confirmed = Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::ConfirmDeleteProduct(name).to_string())
                .default(false)
                .interact()?;
            if !confirmed {
                msg_info!(Message::OperationCancelled);
                return Ok(());
            }
        }

        if self.view_model.delete_product(id).await? {
            msg_success!(Message::ProductDeleted(id));
        }
        Ok(())
    }

    async fn interactive(&mut self) -> Result<()> {
        let options = ["Add product", "Edit product", "Delete product", "Refresh", "Quit"];

        loop {
            self.render()?;
            let selection = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::SelectProductAction.to_string())
                .items(&options)
                .default(0)
                .interact()?;

            match selection {
                0 => self.add(AddArgs { name: None, price: None }).await?,
                1 => {
                    self.edit(EditArgs {
                        id: None,
                        name: None,
                        price: None,
                    })
                    .await?
                }
                2 => self.delete(DeleteArgs { id: None, yes: false }).await?,
                3 => {
                    let count = self.view_model.refresh().await?;
                    msg_info!(Message::ProductsLoaded(count));
                }
                _ => return Ok(()),
            }
        }
    }
}

pub async fn list(context: DatabaseContext) -> Result<()> {
    let mut page = ProductPage::new(context);
    page.on_appearing().await?;
    page.render()
}

pub async fn add(context: DatabaseContext, args: AddArgs) -> Result<()> {
    let mut page = ProductPage::new(context);
    page.on_appearing().await?;
    page.add(args).await?;
    page.render()
}

pub async fn edit(context: DatabaseContext, args: EditArgs) -> Result<()> {
    let mut page = ProductPage::new(context);
    page.on_appearing().await?;
    page.edit(args).await?;
    page.render()
}

pub async fn delete(context: DatabaseContext, args: DeleteArgs) -> Result<()> {
    let mut page = ProductPage::new(context);
    page.on_appearing().await?;
    page.delete(args).await?;
    page.render()
}

pub async fn show(context: DatabaseContext, args: ShowArgs) -> Result<()> {
    match context.get_by_key::<Product>(args.id).await? {
        Some(product) => View::product(&product),
        None => {
            msg_error!(Message::ProductNotFound(args.id));
            Ok(())
        }
    }
}

pub async fn search(context: DatabaseContext, args: SearchArgs) -> Result<()> {
    let products: Vec<Product> = context.get_filtered(args.filter()).await?;
    if products.is_empty() {
        msg_info!(Message::NoProductsMatching);
        return Ok(());
    }

    msg_print!(Message::ProductsMatchingHeader, true);
    View::products(&products)
}

pub async fn interactive(context: DatabaseContext) -> Result<()> {
    let mut page = ProductPage::new(context);
    page.on_appearing().await?;
    page.interactive().await
}
