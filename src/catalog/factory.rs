use crate::catalog::controller::BookTableController;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::gateway::factory::create_gateway;
use crate::gateway::GatewayVia;

pub fn create_controller(config: &Configuration, via: GatewayVia) -> LibraryResult<BookTableController> {
    let gateway = create_gateway(config, via)?;
    Ok(BookTableController::new(config, gateway))
}
