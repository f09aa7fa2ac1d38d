//! Table access, one repository per table.

mod category_repo;
mod dish_repo;
mod employee_repo;
mod setmeal_repo;

pub use category_repo::CategoryRepo;
pub use dish_repo::DishRepo;
pub use employee_repo::EmployeeRepo;
pub use setmeal_repo::SetmealRepo;
