pub mod customer;
pub mod estimate;
pub mod estimate_item;
pub mod invoice;
pub mod invoice_item;
pub mod organization;
pub mod payment;
pub mod product;
pub mod purchase_order;
pub mod purchase_order_item;
pub mod reminder;
pub mod supplier;
pub mod tax;
