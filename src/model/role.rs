/// What an actor is allowed to do. Handlers ask for capabilities, never for
/// roles, so the table below is the only place authorization branches on role.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Capability {
    ManageEmployees,
    ReadEmployees,
    ReadLogs,
    WriteOwnLogs,
    ApproveLogs,
    DeleteAnyLog,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Role {
    Manager = 1,
    TeamLeader = 2,
}

impl Role {
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Role::Manager),
            2 => Some(Role::TeamLeader),
            _ => None,
        }
    }

    pub fn allows(&self, cap: Capability) -> bool {
        use Capability::*;
        match self {
            Role::Manager => matches!(
                cap,
                ManageEmployees | ReadEmployees | ReadLogs | ApproveLogs | DeleteAnyLog
            ),
            Role::TeamLeader => matches!(cap, ReadEmployees | ReadLogs | WriteOwnLogs),
        }
    }
}
