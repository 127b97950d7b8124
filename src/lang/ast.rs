use super::{Column, Ident};
use std::rc::Rc;

#[derive(Debug, PartialEq)]
pub enum Statement {
    End(Column),
    For(Column, Ident, Expression, Expression, Option<Expression>),
    Gosub(Column, Expression),
    Goto(Column, Expression),
    If(Column, Expression, Box<Statement>),
    Input(Column, Option<Rc<str>>, Vec<(Column, Ident)>),
    Let(Column, Ident, Expression),
    Next(Column, Option<Ident>),
    Print(Column, Vec<PrintItem>),
    Rem(Column),
    Return(Column),
    Stop(Column),
    Troff(Column),
    Tron(Column),
}

#[derive(Debug, PartialEq)]
pub enum PrintItem {
    Expression(Expression),
    /// Advance to the next print zone.
    Comma(Column),
    /// No gap.
    Semicolon(Column),
}

#[derive(Debug, PartialEq)]
pub enum Expression {
    Number(Column, f64),
    String(Column, Rc<str>),
    Var(Column, Ident),
    Function(Column, Ident, Vec<Expression>),
    Negation(Column, Box<Expression>),
    Not(Column, Box<Expression>),
    Power(Column, Box<Expression>, Box<Expression>),
    Multiply(Column, Box<Expression>, Box<Expression>),
    Divide(Column, Box<Expression>, Box<Expression>),
    Add(Column, Box<Expression>, Box<Expression>),
    Subtract(Column, Box<Expression>, Box<Expression>),
    Equal(Column, Box<Expression>, Box<Expression>),
    NotEqual(Column, Box<Expression>, Box<Expression>),
    Less(Column, Box<Expression>, Box<Expression>),
    LessEqual(Column, Box<Expression>, Box<Expression>),
    Greater(Column, Box<Expression>, Box<Expression>),
    GreaterEqual(Column, Box<Expression>, Box<Expression>),
    And(Column, Box<Expression>, Box<Expression>),
    Or(Column, Box<Expression>, Box<Expression>),
}

impl Statement {
    pub fn column(&self) -> Column {
        use Statement::*;
        match self {
            End(col)
            | For(col, ..)
            | Gosub(col, _)
            | Goto(col, _)
            | If(col, ..)
            | Input(col, ..)
            | Let(col, ..)
            | Next(col, _)
            | Print(col, _)
            | Rem(col)
            | Return(col)
            | Stop(col)
            | Troff(col)
            | Tron(col) => col.clone(),
        }
    }
}

impl Expression {
    pub fn column(&self) -> Column {
        use Expression::*;
        match self {
            Number(col, _)
            | String(col, _)
            | Var(col, _)
            | Function(col, ..)
            | Negation(col, _)
            | Not(col, _)
            | Power(col, ..)
            | Multiply(col, ..)
            | Divide(col, ..)
            | Add(col, ..)
            | Subtract(col, ..)
            | Equal(col, ..)
            | NotEqual(col, ..)
            | Less(col, ..)
            | LessEqual(col, ..)
            | Greater(col, ..)
            | GreaterEqual(col, ..)
            | And(col, ..)
            | Or(col, ..) => col.clone(),
        }
    }
}

pub trait Visitor {
    fn visit_statement(&mut self, _: &Statement) {}
    fn visit_assignment(&mut self, _: &Column, _: &Ident) {}
    fn visit_expression(&mut self, _: &Expression) {}
}

pub trait AcceptVisitor {
    fn accept<V: Visitor>(&self, visitor: &mut V);
}

impl AcceptVisitor for Statement {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Statement::*;
        match self {
            End(_) | Rem(_) | Return(_) | Stop(_) | Troff(_) | Tron(_) => {}
            For(col, ident, expr1, expr2, expr3) => {
                visitor.visit_assignment(col, ident);
                expr1.accept(visitor);
                expr2.accept(visitor);
                if let Some(expr3) = expr3 {
                    expr3.accept(visitor);
                }
            }
            Gosub(_, expr) | Goto(_, expr) => {
                expr.accept(visitor);
            }
            If(_, predicate, then) => {
                predicate.accept(visitor);
                then.accept(visitor);
            }
            Input(_, _, vec_ident) => {
                for (col, ident) in vec_ident {
                    visitor.visit_assignment(col, ident);
                }
            }
            Let(col, ident, expr) => {
                visitor.visit_assignment(col, ident);
                expr.accept(visitor);
            }
            Next(col, ident) => {
                if let Some(ident) = ident {
                    visitor.visit_assignment(col, ident);
                }
            }
            Print(_, items) => {
                for item in items {
                    if let PrintItem::Expression(expr) = item {
                        expr.accept(visitor);
                    }
                }
            }
        }
        visitor.visit_statement(self)
    }
}

impl AcceptVisitor for Expression {
    fn accept<V: Visitor>(&self, visitor: &mut V) {
        use Expression::*;
        match self {
            Number(..) | String(..) | Var(..) => {}
            Function(_, _, vec_expr) => {
                for expr in vec_expr {
                    expr.accept(visitor);
                }
            }
            Negation(_, expr) | Not(_, expr) => expr.accept(visitor),
            Power(_, expr1, expr2)
            | Multiply(_, expr1, expr2)
            | Divide(_, expr1, expr2)
            | Add(_, expr1, expr2)
            | Subtract(_, expr1, expr2)
            | Equal(_, expr1, expr2)
            | NotEqual(_, expr1, expr2)
            | Less(_, expr1, expr2)
            | LessEqual(_, expr1, expr2)
            | Greater(_, expr1, expr2)
            | GreaterEqual(_, expr1, expr2)
            | And(_, expr1, expr2)
            | Or(_, expr1, expr2) => {
                expr1.accept(visitor);
                expr2.accept(visitor);
            }
        }
        visitor.visit_expression(self)
    }
}
