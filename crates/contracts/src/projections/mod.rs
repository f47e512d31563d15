pub mod p900_payroll_matrix;
