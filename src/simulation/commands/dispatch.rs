use crate::api::protocol::{Command, Response};
use crate::domain::KernelError;

use super::KernelCore;

pub(super) fn dispatch(kernel: &mut KernelCore, command: Command) -> Result<Response, KernelError> {
    let kind = command.kind();
    let result = match command {
        Command::Initialize { bodies } => kernel.initialize(&bodies).map(|_| Response::Ack),
        Command::Spawn(body) => kernel.spawn(body).map(|_| Response::Ack),
        Command::Advance { dt } => Ok(Response::Positions(kernel.advance(dt))),
        Command::Impulse => {
            kernel.impulse();
            Ok(Response::Ack)
        }
        Command::Reset { baseline_count } => {
            kernel.reset(baseline_count as usize);
            Ok(Response::Ack)
        }
        Command::Configure { params } => kernel.configure(params).map(|_| Response::Ack),
        Command::BodyCount => Ok(Response::BodyCount(kernel.body_count() as u32)),
    };

    if let Err(e) = &result {
        kernel_warn!("{} rejected: {}", kind, e);
    }
    result
}

pub(super) fn dispatch_json(kernel: &mut KernelCore, json: &str) -> Result<Response, KernelError> {
    let command = Command::from_json(json).map_err(|e| {
        kernel_warn!("{}", e);
        e
    })?;
    dispatch(kernel, command)
}
