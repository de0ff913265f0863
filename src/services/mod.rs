pub mod customers;
pub mod estimates;
pub mod invoices;
pub mod payments;
pub mod pricing;
pub mod products;
pub mod purchase_orders;
pub mod reminders;
pub mod reports;
pub mod stock;
pub mod suppliers;
pub mod taxes;

pub use customers::CustomerService;
pub use estimates::EstimateService;
pub use invoices::InvoiceService;
pub use payments::PaymentService;
pub use products::ProductService;
pub use purchase_orders::PurchaseOrderService;
pub use reminders::ReminderService;
pub use reports::ReportService;
pub use suppliers::SupplierService;
pub use taxes::TaxService;
