use std::fmt;

use crate::equation::ast::Equation;

// Same grammar the parser accepts: "<target>: <op1> <op2> ...".
impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:", self.target())?;
        for operand in self.operands() {
            write!(f, " {}", operand)?;
        }
        Ok(())
    }
}
