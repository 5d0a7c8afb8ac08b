//! The fixed set of data interfaces a project can enable.
//!
//! Keys are the backend's boolean field names on a project; labels are the
//! display text used by forms, the upload picker, and exports.

/// One uploadable interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interface {
    pub key: &'static str,
    pub label: &'static str,
}

const fn iface(key: &'static str, label: &'static str) -> Interface {
    Interface { key, label }
}

pub const INTERFACES: [Interface; 35] = [
    iface("historical_sales", "Historical Sales"),
    iface("historical_campaigns", "Historical Campaigns"),
    iface("historical_product_location_campaigns", "Historical Product Location Campaigns"),
    iface("historical_production_material_issues_and_receipts", "Historical Production Material Issues and Receipts"),
    iface("sales", "Sales"),
    iface("balances", "Balances"),
    iface("batch_balances", "Batch Balances"),
    iface("customer_orders", "Customer Orders"),
    iface("distribution_orders", "Distribution Orders"),
    iface("purchase_orders", "Purchase Orders"),
    iface("distribution_links", "Distribution Links"),
    iface("locations", "Locations"),
    iface("product_groups", "Product Groups"),
    iface("product_structure_routings", "Product Structure Routings"),
    iface("product_structures", "Product Structures"),
    iface("production_capacities", "Production Capacities"),
    iface("production_order_operations", "Production Order Operations"),
    iface("end_customers", "End Customers"),
    iface("campaigns", "Campaigns"),
    iface("product_location_campaigns", "Product Location Campaigns"),
    iface("product_replacements", "Product Replacements"),
    iface("suppliers", "Suppliers"),
    iface("purchase_capacities", "Purchase Capacities"),
    iface("distribution_resources", "Distribution Resources"),
    iface("production_orders", "Production Orders"),
    iface("production_resources", "Production Resources"),
    iface("production_shift_patterns", "Production Shift Patterns"),
    iface("product_locations", "Product Locations"),
    iface("products", "Products"),
    iface("stock_areas", "Stock Areas"),
    iface("output_demand_plans", "Output Demand Plans"),
    iface("output_distribution_requisitions", "Output Distribution Requisitions"),
    iface("output_purchase_requisitions", "Output Purchase Requisitions"),
    iface("output_planned_production_orders", "Output Planned Production Orders"),
    iface("output_production_order_changes", "Output Production Order Changes"),
];
