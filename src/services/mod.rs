pub mod stakeholders;
