use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use business::domain::cart::model::Cart;
use business::domain::product::errors::ProductError;
use business::domain::product::input::ProductInput;
use business::domain::product::use_cases::create::CreateProductParams;
use business::domain::product::use_cases::delete::DeleteProductParams;
use business::domain::product::use_cases::get_by_id::GetProductByIdParams;
use business::domain::product::use_cases::update_stocks::UpdateProductStocksParams;
use business::domain::shared::value_objects::ProductId;

use crate::commands::dto::{CartResponse, Command, Payload, ProductResponse, Reply};
use crate::commands::error::{ErrorResponse, IntoErrorResponse};
use crate::setup::dependency_injection::DependencyContainer;

/// Single admin/customer session: the use cases plus the session's cart.
pub struct Console {
    container: DependencyContainer,
    cart: Cart,
}

impl Console {
    pub fn new(container: DependencyContainer) -> Self {
        Self {
            container,
            cart: Cart::new(),
        }
    }

    /// Creates every valid product of `products`; returns how many were created.
    pub async fn seed(&mut self, products: Vec<ProductInput>) -> usize {
        let mut created = 0;
        for input in products {
            match self
                .container
                .create_product
                .execute(CreateProductParams { input })
                .await
            {
                Ok(_) => created += 1,
                Err(ProductError::Invalid(errors)) => {
                    let messages: Vec<String> = errors
                        .codes()
                        .iter()
                        .map(|code| self.container.translator.translate(*code))
                        .collect();
                    tracing::warn!(errors = %messages.join("; "), "skipping invalid seed product");
                }
                Err(err) => tracing::error!(error = %err, "failed to seed product"),
            }
        }
        created
    }

    /// Answers each command line of `reader` with one reply line on `writer`.
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let reply = match serde_json::from_str::<Command>(line) {
                Ok(command) => self.handle(command).await,
                Err(err) => {
                    tracing::warn!(error = %err, "malformed command");
                    Reply::error(ErrorResponse::new("BadRequest", "command.malformed"))
                }
            };

            let mut out = serde_json::to_string(&reply)?;
            out.push('\n');
            writer.write_all(out.as_bytes()).await?;
            writer.flush().await?;
        }
        Ok(())
    }

    pub async fn handle(&mut self, command: Command) -> Reply {
        tracing::debug!(?command, "handling command");
        match command {
            Command::Create { product } => self.create(product).await,
            Command::List => match self.container.get_all_products.execute().await {
                Ok(products) => Reply::ok(Payload::Products(
                    products.into_iter().map(ProductResponse::from).collect(),
                )),
                Err(err) => self.product_error(err),
            },
            Command::Get { id } => match self
                .container
                .get_product_by_id
                .execute(GetProductByIdParams {
                    id: ProductId::new(id),
                })
                .await
            {
                Ok(product) => Reply::ok(Payload::Product(product.into())),
                Err(err) => self.product_error(err),
            },
            Command::Delete { id } => {
                let result = self
                    .container
                    .delete_product
                    .execute(DeleteProductParams {
                        id: ProductId::new(id),
                        cart: &mut self.cart,
                    })
                    .await;
                match result {
                    Ok(()) => self.cart_reply(),
                    Err(err) => self.product_error(err),
                }
            }
            Command::AddToCart { id, quantity } => {
                let result = self
                    .container
                    .get_product_by_id
                    .execute(GetProductByIdParams {
                        id: ProductId::new(id),
                    })
                    .await;
                match result {
                    Ok(product) => {
                        self.cart.add_item(&product, quantity);
                        self.cart_reply()
                    }
                    Err(err) => self.product_error(err),
                }
            }
            Command::RemoveFromCart { id } => {
                self.cart.remove_line(ProductId::new(id));
                self.cart_reply()
            }
            Command::Cart => self.cart_reply(),
            Command::ClearCart => {
                self.cart.clear();
                self.cart_reply()
            }
            Command::Checkout => self.checkout().await,
        }
    }

    async fn create(&mut self, input: ProductInput) -> Reply {
        let submitted = input.clone();
        match self
            .container
            .create_product
            .execute(CreateProductParams { input })
            .await
        {
            Ok(product) => Reply::ok(Payload::Product(product.into())),
            Err(err @ ProductError::Invalid(_)) => Reply::error(
                err.into_error_response(self.container.translator.as_ref())
                    .with_input(submitted),
            ),
            Err(err) => self.product_error(err),
        }
    }

    async fn checkout(&mut self) -> Reply {
        if self.cart.is_empty() {
            return Reply::error(ErrorResponse::new("ValidationError", "cart.empty"));
        }

        let result = self
            .container
            .update_product_stocks
            .execute(UpdateProductStocksParams { cart: &self.cart })
            .await;
        match result {
            Ok(()) => {
                self.cart.clear();
                self.cart_reply()
            }
            Err(err) => self.product_error(err),
        }
    }

    fn cart_reply(&self) -> Reply {
        Reply::ok(Payload::Cart(CartResponse::from(&self.cart)))
    }

    fn product_error(&self, err: ProductError) -> Reply {
        Reply::error(err.into_error_response(self.container.translator.as_ref()))
    }
}
