use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_organizations_table::Migration),
            Box::new(m20240101_000002_create_taxes_table::Migration),
            Box::new(m20240101_000003_create_products_table::Migration),
            Box::new(m20240101_000004_create_counterparties_tables::Migration),
            Box::new(m20240101_000005_create_estimates_tables::Migration),
            Box::new(m20240101_000006_create_invoices_tables::Migration),
            Box::new(m20240101_000007_create_purchase_orders_tables::Migration),
            Box::new(m20240101_000008_create_payments_table::Migration),
            Box::new(m20240101_000009_create_reminders_table::Migration),
        ]
    }
}

// Migration implementations

mod m20240101_000001_create_organizations_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000001_create_organizations_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Organizations::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Organizations::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Organizations::Name).string().not_null())
                        .col(ColumnDef::new(Organizations::State).string().null())
                        .col(ColumnDef::new(Organizations::GstNumber).string().null())
                        .col(
                            ColumnDef::new(Organizations::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Organizations::UpdatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Organizations::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum Organizations {
        Table,
        Id,
        Name,
        State,
        GstNumber,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000002_create_taxes_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000002_create_taxes_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Taxes::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Taxes::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Taxes::OrganizationId).uuid().not_null())
                        .col(ColumnDef::new(Taxes::Name).string().not_null())
                        .col(
                            ColumnDef::new(Taxes::Rate)
                                .decimal_len(8, 4)
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Taxes::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Taxes::UpdatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_taxes_organization_id")
                        .table(Taxes::Table)
                        .col(Taxes::OrganizationId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Taxes::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum Taxes {
        Table,
        Id,
        OrganizationId,
        Name,
        Rate,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000003_create_products_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000003_create_products_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Products::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Products::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Products::OrganizationId).uuid().not_null())
                        .col(ColumnDef::new(Products::Name).string().not_null())
                        .col(ColumnDef::new(Products::Description).string().null())
                        .col(ColumnDef::new(Products::Sku).string().null())
                        .col(
                            ColumnDef::new(Products::SellingPrice)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Products::PurchasePrice)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Products::StockQuantity)
                                .integer()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Products::TaxId).uuid().null())
                        .col(ColumnDef::new(Products::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Products::UpdatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_products_organization_id")
                        .table(Products::Table)
                        .col(Products::OrganizationId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Products::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum Products {
        Table,
        Id,
        OrganizationId,
        Name,
        Description,
        Sku,
        SellingPrice,
        PurchasePrice,
        StockQuantity,
        TaxId,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000004_create_counterparties_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000004_create_counterparties_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Customers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Customers::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Customers::OrganizationId).uuid().not_null())
                        .col(ColumnDef::new(Customers::Name).string().not_null())
                        .col(ColumnDef::new(Customers::Email).string().null())
                        .col(ColumnDef::new(Customers::Phone).string().null())
                        .col(ColumnDef::new(Customers::Address).string().null())
                        .col(ColumnDef::new(Customers::State).string().null())
                        .col(ColumnDef::new(Customers::GstNumber).string().null())
                        .col(ColumnDef::new(Customers::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Customers::UpdatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_customers_organization_id")
                        .table(Customers::Table)
                        .col(Customers::OrganizationId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Suppliers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Suppliers::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Suppliers::OrganizationId).uuid().not_null())
                        .col(ColumnDef::new(Suppliers::Name).string().not_null())
                        .col(ColumnDef::new(Suppliers::Email).string().null())
                        .col(ColumnDef::new(Suppliers::Phone).string().null())
                        .col(ColumnDef::new(Suppliers::Address).string().null())
                        .col(ColumnDef::new(Suppliers::State).string().null())
                        .col(ColumnDef::new(Suppliers::GstNumber).string().null())
                        .col(ColumnDef::new(Suppliers::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Suppliers::UpdatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_suppliers_organization_id")
                        .table(Suppliers::Table)
                        .col(Suppliers::OrganizationId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Suppliers::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Customers::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum Customers {
        Table,
        Id,
        OrganizationId,
        Name,
        Email,
        Phone,
        Address,
        State,
        GstNumber,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(Iden)]
    enum Suppliers {
        Table,
        Id,
        OrganizationId,
        Name,
        Email,
        Phone,
        Address,
        State,
        GstNumber,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000005_create_estimates_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000005_create_estimates_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Estimates::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Estimates::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Estimates::OrganizationId).uuid().not_null())
                        .col(ColumnDef::new(Estimates::CustomerId).uuid().not_null())
                        .col(ColumnDef::new(Estimates::EstimateDate).date().not_null())
                        .col(ColumnDef::new(Estimates::ExpiryDate).date().null())
                        .col(ColumnDef::new(Estimates::Status).string().not_null())
                        .col(
                            ColumnDef::new(Estimates::Subtotal)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Estimates::CgstAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Estimates::SgstAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Estimates::IgstAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Estimates::TotalAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Estimates::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Estimates::UpdatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_estimates_organization_id")
                        .table(Estimates::Table)
                        .col(Estimates::OrganizationId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(EstimateItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(EstimateItems::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(EstimateItems::EstimateId).uuid().not_null())
                        .col(ColumnDef::new(EstimateItems::ProductId).uuid().null())
                        .col(ColumnDef::new(EstimateItems::TaxId).uuid().null())
                        .col(ColumnDef::new(EstimateItems::ItemName).string().not_null())
                        .col(
                            ColumnDef::new(EstimateItems::UnitPrice)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(EstimateItems::Quantity).integer().not_null())
                        .col(
                            ColumnDef::new(EstimateItems::SubTotalPrice)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(EstimateItems::CgstRate)
                                .decimal_len(8, 4)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(EstimateItems::SgstRate)
                                .decimal_len(8, 4)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(EstimateItems::IgstRate)
                                .decimal_len(8, 4)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(EstimateItems::CgstAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(EstimateItems::SgstAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(EstimateItems::IgstAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(EstimateItems::TotalPrice)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(EstimateItems::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(EstimateItems::UpdatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_estimate_items_estimate_id")
                                .from(EstimateItems::Table, EstimateItems::EstimateId)
                                .to(Estimates::Table, Estimates::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_estimate_items_estimate_id")
                        .table(EstimateItems::Table)
                        .col(EstimateItems::EstimateId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(EstimateItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Estimates::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum Estimates {
        Table,
        Id,
        OrganizationId,
        CustomerId,
        EstimateDate,
        ExpiryDate,
        Status,
        Subtotal,
        CgstAmount,
        SgstAmount,
        IgstAmount,
        TotalAmount,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(Iden)]
    enum EstimateItems {
        Table,
        Id,
        EstimateId,
        ProductId,
        TaxId,
        ItemName,
        UnitPrice,
        Quantity,
        SubTotalPrice,
        CgstRate,
        SgstRate,
        IgstRate,
        CgstAmount,
        SgstAmount,
        IgstAmount,
        TotalPrice,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000006_create_invoices_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000006_create_invoices_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Invoices::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Invoices::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Invoices::OrganizationId).uuid().not_null())
                        .col(ColumnDef::new(Invoices::CustomerId).uuid().not_null())
                        .col(ColumnDef::new(Invoices::InvoiceDate).date().not_null())
                        .col(ColumnDef::new(Invoices::DueDate).date().null())
                        .col(ColumnDef::new(Invoices::Status).string().not_null())
                        .col(
                            ColumnDef::new(Invoices::Subtotal)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Invoices::CgstAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Invoices::SgstAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Invoices::IgstAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Invoices::RoundOffAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Invoices::TotalAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Invoices::PaidAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(Invoices::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Invoices::UpdatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_invoices_organization_id")
                        .table(Invoices::Table)
                        .col(Invoices::OrganizationId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_invoices_customer_id")
                        .table(Invoices::Table)
                        .col(Invoices::CustomerId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(InvoiceItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(InvoiceItems::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(InvoiceItems::InvoiceId).uuid().not_null())
                        .col(ColumnDef::new(InvoiceItems::ProductId).uuid().null())
                        .col(ColumnDef::new(InvoiceItems::TaxId).uuid().null())
                        .col(ColumnDef::new(InvoiceItems::ItemName).string().not_null())
                        .col(
                            ColumnDef::new(InvoiceItems::UnitPrice)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(InvoiceItems::Quantity).integer().not_null())
                        .col(
                            ColumnDef::new(InvoiceItems::SubTotalPrice)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InvoiceItems::CgstRate)
                                .decimal_len(8, 4)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InvoiceItems::SgstRate)
                                .decimal_len(8, 4)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InvoiceItems::IgstRate)
                                .decimal_len(8, 4)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InvoiceItems::CgstAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InvoiceItems::SgstAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InvoiceItems::IgstAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InvoiceItems::TotalPrice)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InvoiceItems::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InvoiceItems::UpdatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_invoice_items_invoice_id")
                                .from(InvoiceItems::Table, InvoiceItems::InvoiceId)
                                .to(Invoices::Table, Invoices::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_invoice_items_invoice_id")
                        .table(InvoiceItems::Table)
                        .col(InvoiceItems::InvoiceId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(InvoiceItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Invoices::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum Invoices {
        Table,
        Id,
        OrganizationId,
        CustomerId,
        InvoiceDate,
        DueDate,
        Status,
        Subtotal,
        CgstAmount,
        SgstAmount,
        IgstAmount,
        RoundOffAmount,
        TotalAmount,
        PaidAmount,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(Iden)]
    enum InvoiceItems {
        Table,
        Id,
        InvoiceId,
        ProductId,
        TaxId,
        ItemName,
        UnitPrice,
        Quantity,
        SubTotalPrice,
        CgstRate,
        SgstRate,
        IgstRate,
        CgstAmount,
        SgstAmount,
        IgstAmount,
        TotalPrice,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000007_create_purchase_orders_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000007_create_purchase_orders_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PurchaseOrders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PurchaseOrders::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrders::OrganizationId)
                                .uuid()
                                .not_null(),
                        )
                        .col(ColumnDef::new(PurchaseOrders::SupplierId).uuid().not_null())
                        .col(ColumnDef::new(PurchaseOrders::OrderDate).date().not_null())
                        .col(
                            ColumnDef::new(PurchaseOrders::ExpectedDeliveryDate)
                                .date()
                                .null(),
                        )
                        .col(ColumnDef::new(PurchaseOrders::Status).string().not_null())
                        .col(
                            ColumnDef::new(PurchaseOrders::Subtotal)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrders::CgstAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrders::SgstAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrders::IgstAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrders::TotalAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrders::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrders::UpdatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_purchase_orders_organization_id")
                        .table(PurchaseOrders::Table)
                        .col(PurchaseOrders::OrganizationId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(PurchaseOrderItems::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PurchaseOrderItems::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrderItems::PurchaseOrderId)
                                .uuid()
                                .not_null(),
                        )
                        .col(ColumnDef::new(PurchaseOrderItems::ProductId).uuid().null())
                        .col(ColumnDef::new(PurchaseOrderItems::TaxId).uuid().null())
                        .col(
                            ColumnDef::new(PurchaseOrderItems::ItemName)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrderItems::PurchasePrice)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrderItems::Quantity)
                                .integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrderItems::SubTotalPrice)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrderItems::CgstRate)
                                .decimal_len(8, 4)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrderItems::SgstRate)
                                .decimal_len(8, 4)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrderItems::IgstRate)
                                .decimal_len(8, 4)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrderItems::CgstAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrderItems::SgstAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrderItems::IgstAmount)
                                .decimal_len(12, 2)
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrderItems::TotalPrice)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrderItems::CreatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PurchaseOrderItems::UpdatedAt)
                                .timestamp()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_purchase_order_items_purchase_order_id")
                                .from(
                                    PurchaseOrderItems::Table,
                                    PurchaseOrderItems::PurchaseOrderId,
                                )
                                .to(PurchaseOrders::Table, PurchaseOrders::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_purchase_order_items_purchase_order_id")
                        .table(PurchaseOrderItems::Table)
                        .col(PurchaseOrderItems::PurchaseOrderId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PurchaseOrderItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(PurchaseOrders::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum PurchaseOrders {
        Table,
        Id,
        OrganizationId,
        SupplierId,
        OrderDate,
        ExpectedDeliveryDate,
        Status,
        Subtotal,
        CgstAmount,
        SgstAmount,
        IgstAmount,
        TotalAmount,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(Iden)]
    enum PurchaseOrderItems {
        Table,
        Id,
        PurchaseOrderId,
        ProductId,
        TaxId,
        ItemName,
        PurchasePrice,
        Quantity,
        SubTotalPrice,
        CgstRate,
        SgstRate,
        IgstRate,
        CgstAmount,
        SgstAmount,
        IgstAmount,
        TotalPrice,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240101_000008_create_payments_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000008_create_payments_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Payments::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(Payments::Id).uuid().primary_key().not_null())
                        .col(ColumnDef::new(Payments::OrganizationId).uuid().not_null())
                        .col(ColumnDef::new(Payments::InvoiceId).uuid().not_null())
                        .col(
                            ColumnDef::new(Payments::Amount)
                                .decimal_len(12, 2)
                                .not_null(),
                        )
                        .col(ColumnDef::new(Payments::PaymentDate).date().not_null())
                        .col(ColumnDef::new(Payments::PaymentMethod).string().null())
                        .col(ColumnDef::new(Payments::Notes).string().null())
                        .col(ColumnDef::new(Payments::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Payments::UpdatedAt).timestamp().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_payments_invoice_id")
                                .from(Payments::Table, Payments::InvoiceId)
                                .to(Invoices::Table, Invoices::Id)
                                .on_delete(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_payments_invoice_id")
                        .table(Payments::Table)
                        .col(Payments::InvoiceId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Payments::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum Payments {
        Table,
        Id,
        OrganizationId,
        InvoiceId,
        Amount,
        PaymentDate,
        PaymentMethod,
        Notes,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(Iden)]
    enum Invoices {
        Table,
        Id,
    }
}

mod m20240101_000009_create_reminders_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240101_000009_create_reminders_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Reminders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Reminders::Id)
                                .uuid()
                                .primary_key()
                                .not_null(),
                        )
                        .col(ColumnDef::new(Reminders::OrganizationId).uuid().not_null())
                        .col(ColumnDef::new(Reminders::Title).string().not_null())
                        .col(ColumnDef::new(Reminders::Description).string().null())
                        .col(ColumnDef::new(Reminders::RemindAt).timestamp().not_null())
                        .col(ColumnDef::new(Reminders::RelatedToType).string().null())
                        .col(ColumnDef::new(Reminders::RelatedToId).uuid().null())
                        .col(ColumnDef::new(Reminders::CreatedAt).timestamp().not_null())
                        .col(ColumnDef::new(Reminders::UpdatedAt).timestamp().not_null())
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_reminders_organization_id")
                        .table(Reminders::Table)
                        .col(Reminders::OrganizationId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Reminders::Table).to_owned())
                .await
        }
    }

    #[derive(Iden)]
    enum Reminders {
        Table,
        Id,
        OrganizationId,
        Title,
        Description,
        RemindAt,
        RelatedToType,
        RelatedToId,
        CreatedAt,
        UpdatedAt,
    }
}
